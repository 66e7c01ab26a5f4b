//! Win detection logic for tic-tac-toe.

use super::super::board::{Board, Square};
use super::super::player::Seat;
use super::super::position::Position;
use tracing::instrument;

/// The eight winning combinations, checked in this order: rows, columns, diagonals.
pub const COMBINATIONS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Returns the first combination fully held by `seat`, if any.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, seat: Seat) -> Option<[Position; 3]> {
    COMBINATIONS
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(seat)))
}

/// Checks if either seat has three in a row.
///
/// `First` is checked before `Second`; a board reached through legal play
/// never has both.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Seat> {
    [Seat::First, Seat::Second]
        .into_iter()
        .find(|seat| completes_line(board, *seat).is_some())
}
