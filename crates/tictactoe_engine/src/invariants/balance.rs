//! Mark balance: the opening player is never behind and never more than one ahead.

use super::super::game::Game;
use super::super::player::Seat;
use super::Invariant;

/// Invariant: first-seat marks equal second-seat marks, or exceed them by one.
pub struct MarksBalanced;

impl Invariant<Game> for MarksBalanced {
    fn holds(game: &Game) -> bool {
        let first = game.board().count(Seat::First);
        let second = game.board().count(Seat::Second);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "Opening player has the same number of marks as the opponent, or one more"
    }
}
