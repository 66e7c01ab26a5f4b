//! Results of accepted moves.

use super::player::PlayerId;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player completed a line.
    Win(PlayerId),
    /// The board filled up with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&PlayerId> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "\"{}\" wins!", player),
            Outcome::Draw => write!(f, "Game is tied!"),
        }
    }
}

/// What happened after a move was accepted and applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Play continues with the other player.
    Continue,
    /// This move ended the game; the board already shows it.
    GameOver(Outcome),
}

impl MoveOutcome {
    /// Returns the outcome if the move ended the game.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            MoveOutcome::Continue => None,
            MoveOutcome::GameOver(outcome) => Some(outcome),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(PlayerId),
    /// Game ended in a draw.
    Draw,
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win(player) => GameStatus::Won(player),
            Outcome::Draw => GameStatus::Draw,
        }
    }
}
