//! Winner consistency with the board.

use super::super::game::Game;
use super::super::player::Seat;
use super::super::rules;
use super::Invariant;

/// Invariant: a recorded winner holds a line and made the last move; without
/// a recorded winner nobody holds a line.
pub struct WinnerHoldsLine;

impl Invariant<Game> for WinnerHoldsLine {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        match game.winner_seat() {
            None => rules::check_winner(board).is_none(),
            Some(seat) => {
                let moved_last = match seat {
                    Seat::First => board.count(Seat::First) == board.count(Seat::Second) + 1,
                    Seat::Second => board.count(Seat::First) == board.count(Seat::Second),
                };
                moved_last
                    && rules::completes_line(board, seat).is_some()
                    && rules::completes_line(board, seat.opponent()).is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Winner is recorded exactly when one player holds a line, and that player moved last"
    }
}
