//! Turn bookkeeping invariants.

use super::super::game::Game;
use super::super::player::Seat;
use super::Invariant;

/// Invariant: the seat due to move is implied by the mark counts.
///
/// Equal counts mean the opening player moves; otherwise the responder does.
pub struct TurnFollowsMarks;

impl Invariant<Game> for TurnFollowsMarks {
    fn holds(game: &Game) -> bool {
        let Some(seat) = game.next_turn_seat() else {
            return true;
        };
        let board = game.board();
        let expected = if board.count(Seat::First) == board.count(Seat::Second) {
            Seat::First
        } else {
            Seat::Second
        };
        seat == expected
    }

    fn description() -> &'static str {
        "Next turn belongs to the seat with fewer marks, opening player on ties"
    }
}

/// Invariant: there is no next turn exactly when the game is over.
pub struct TurnClearedWhenTerminal;

impl Invariant<Game> for TurnClearedWhenTerminal {
    fn holds(game: &Game) -> bool {
        game.recorded_next_turn().is_none() == game.is_terminal()
    }

    fn description() -> &'static str {
        "Next turn is empty if and only if the game has ended"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Square};

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new("X", "O");
        assert!(TurnFollowsMarks::holds(&game));
        assert!(TurnClearedWhenTerminal::holds(&game));
    }

    #[test]
    fn test_wrong_seat_to_move_violates() {
        let game = Game::from_parts("X", "O", Board::new(), Some(Seat::Second), None);
        assert!(!TurnFollowsMarks::holds(&game));
    }

    #[test]
    fn test_missing_turn_on_live_game_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Seat::First));
        let game = Game::from_parts("X", "O", board, None, None);
        assert!(!TurnClearedWhenTerminal::holds(&game));
    }

    #[test]
    fn test_stale_turn_on_finished_game_violates() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Seat::First));
        }
        for pos in [Position::Center, Position::BottomLeft] {
            board.set(pos, Square::Occupied(Seat::Second));
        }
        let game = Game::from_parts("X", "O", board, Some(Seat::Second), Some(Seat::First));
        assert!(!TurnClearedWhenTerminal::holds(&game));
        assert_eq!(game.next_turn(), None);
    }
}
