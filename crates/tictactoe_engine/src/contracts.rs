//! Preconditions for a move.
//!
//! Each check is a small named rule. [`LegalMove`] composes them in a fixed
//! order and the first failure decides the error the caller sees.

use super::error::InvalidMove;
use super::game::Game;
use super::player::Seat;
use super::position::Position;
use tracing::instrument;

/// A move that passed every precondition and may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Seat of the player making the move.
    pub seat: Seat,
    /// Square receiving the mark.
    pub position: Position,
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Returns the seat due to move while the game is live.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<Seat, InvalidMove> {
        game.next_turn_seat().ok_or(InvalidMove::GameIsOver)
    }
}

/// Precondition: the mover is the player whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks `player` against the identifier seated at `to_move`.
    #[instrument(skip(game))]
    pub fn check(game: &Game, to_move: Seat, player: &str) -> Result<(), InvalidMove> {
        let expected = game.player(to_move);
        if expected.as_str() != player {
            Err(InvalidMove::NotYourTurn {
                expected: expected.clone(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: both coordinates lie in 0..=2.
pub struct InBounds;

impl InBounds {
    /// Resolves raw coordinates to a board position.
    #[instrument]
    pub fn check(coords: (usize, usize)) -> Result<Position, InvalidMove> {
        Position::from_coords(coords.0, coords.1).ok_or(InvalidMove::OutOfRange)
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the square at `position`.
    #[instrument(skip(game))]
    pub fn check(game: &Game, position: Position) -> Result<(), InvalidMove> {
        if game.board().is_empty(position) {
            Ok(())
        } else {
            Err(InvalidMove::PositionTaken)
        }
    }
}

/// Composite precondition: game live, right player, in range, square free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order.
    #[instrument(skip(game))]
    pub fn check(game: &Game, player: &str, coords: (usize, usize)) -> Result<Placement, InvalidMove> {
        let seat = GameNotOver::check(game)?;
        PlayersTurn::check(game, seat, player)?;
        let position = InBounds::check(coords)?;
        SquareIsEmpty::check(game, position)?;
        Ok(Placement { seat, position })
    }
}
