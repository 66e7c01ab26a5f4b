//! Rules engine for two-player tic-tac-toe on a 3x3 board.
//!
//! The engine tracks whose turn it is, validates proposed moves, updates the
//! board and detects wins and draws. It performs no I/O; presentation belongs
//! to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{start_new_game, InvalidMove, MoveOutcome, Outcome};
//!
//! let mut game = start_new_game("X", "O");
//! assert_eq!(game.make_move("X", (0, 0)), Ok(MoveOutcome::Continue));
//! assert_eq!(game.make_move("X", (0, 1)).unwrap_err().to_string(), "\"O\" moves next");
//!
//! for (player, cell) in [("O", (1, 1)), ("X", (0, 1)), ("O", (1, 0))] {
//!     game.make_move(player, cell).unwrap();
//! }
//! let result = game.make_move("X", (0, 2)).unwrap();
//! assert_eq!(result.outcome(), Some(&Outcome::Win("X".into())));
//! assert_eq!(game.make_move("O", (2, 2)), Err(InvalidMove::GameIsOver));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contracts;
mod error;
mod game;
mod invariants;
mod outcome;
mod player;
mod position;
pub mod rules;
#[cfg(kani)]
mod verification;

pub use board::{Board, Square};
pub use contracts::{GameNotOver, InBounds, LegalMove, Placement, PlayersTurn, SquareIsEmpty};
pub use error::{CorruptGame, InvalidMove, SetupError};
pub use game::{Game, start_new_game};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarksBalanced,
    TurnClearedWhenTerminal, TurnFollowsMarks, WinnerHoldsLine,
};
pub use outcome::{GameStatus, MoveOutcome, Outcome};
pub use player::{PlayerId, Seat};
pub use position::Position;
