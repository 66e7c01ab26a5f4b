//! Error types for the tic-tac-toe engine.

use super::player::PlayerId;

/// A move that was rejected; the game is unchanged.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The game already has a winner or a full board.
    #[display("Game is over")]
    GameIsOver,

    /// Someone other than the expected player tried to move.
    #[display("\"{expected}\" moves next")]
    NotYourTurn {
        /// The player whose turn it is.
        expected: PlayerId,
    },

    /// Row or column outside 0..=2, or input that is not a position at all.
    #[display("Position out of range")]
    OutOfRange,

    /// The target square already holds a mark.
    #[display("Position already taken")]
    PositionTaken,
}

impl std::error::Error for InvalidMove {}

/// A game could not be created.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Both participants were given the same identifier.
    #[display("Players must be distinct, got \"{_0}\" twice")]
    DuplicatePlayers(PlayerId),
}

impl std::error::Error for SetupError {}

/// A game record failed invariant checks.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Corrupt game record: {}", violations.join("; "))]
pub struct CorruptGame {
    /// Descriptions of every violated invariant.
    pub violations: Vec<String>,
}

impl std::error::Error for CorruptGame {}
