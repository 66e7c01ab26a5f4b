//! Property-based tests for the tic-tac-toe engine.

use proptest::prelude::*;
use tictactoe_engine::{
    Game, GameInvariants, InvalidMove, InvariantSet, MoveOutcome, Outcome, Position,
};

const PLAYERS: [&str; 2] = ["X", "O"];

/// A random order in which to visit the nine cells.
fn cell_order() -> impl Strategy<Value = Vec<Position>> {
    Just(Position::ALL.to_vec()).prop_shuffle()
}

/// Coordinates with at least one component outside 0..=2.
fn out_of_range() -> impl Strategy<Value = (usize, usize)> {
    prop_oneof![
        (3usize..1000, 0usize..3),
        (0usize..3, 3usize..1000),
        (3usize..usize::MAX, 3usize..usize::MAX),
    ]
}

/// Plays `order` alternately until the game ends, returning the final outcome
/// and the number of moves made.
fn play_out(game: &mut Game, order: &[Position]) -> (MoveOutcome, usize) {
    let mut last = MoveOutcome::Continue;
    let mut made = 0;
    for pos in order {
        let player = PLAYERS[made % 2];
        last = game.make_move(player, *pos).expect("legal move rejected");
        made += 1;
        if last != MoveOutcome::Continue {
            break;
        }
    }
    (last, made)
}

proptest! {
    /// Property: alternating legal play always terminates in a win or a draw,
    /// and terminal bookkeeping agrees with the signalled outcome.
    #[test]
    fn prop_play_terminates_consistently(order in cell_order()) {
        let mut game = Game::new(PLAYERS[0], PLAYERS[1]);
        let (last, made) = play_out(&mut game, &order);

        prop_assert!(GameInvariants::check_all(&game).is_ok());
        prop_assert_eq!(game.next_turn(), None);
        match last {
            MoveOutcome::GameOver(Outcome::Win(winner)) => {
                prop_assert_eq!(game.winner(), Some(&winner));
                prop_assert_eq!(winner.as_str(), PLAYERS[(made - 1) % 2]);
            }
            MoveOutcome::GameOver(Outcome::Draw) => {
                prop_assert_eq!(made, 9);
                prop_assert_eq!(game.winner(), None);
            }
            MoveOutcome::Continue => prop_assert!(false, "game did not end after {} moves", made),
        }
    }

    /// Property: once the game has ended, every move fails with game-over.
    #[test]
    fn prop_moves_after_end_rejected(
        order in cell_order(),
        mover in 0usize..2,
        row in 0usize..5,
        col in 0usize..5,
    ) {
        let mut game = Game::new(PLAYERS[0], PLAYERS[1]);
        play_out(&mut game, &order);
        let finished = game.clone();

        prop_assert_eq!(game.make_move(PLAYERS[mover], (row, col)), Err(InvalidMove::GameIsOver));
        prop_assert_eq!(game, finished);
    }

    /// Property: the player not on turn is rejected and the board is unchanged.
    #[test]
    fn prop_wrong_turn_rejected(order in cell_order(), prefix in 0usize..9) {
        let mut game = Game::new(PLAYERS[0], PLAYERS[1]);
        let (last, made) = play_out(&mut game, &order[..prefix]);
        prop_assume!(last == MoveOutcome::Continue);

        let before = game.clone();
        let waiting = PLAYERS[(made + 1) % 2];
        let result = game.make_move(waiting, order[prefix]);
        prop_assert!(
            matches!(&result, Err(InvalidMove::NotYourTurn { expected }) if expected.as_str() == PLAYERS[made % 2]),
            "unexpected result {:?}",
            result
        );
        prop_assert_eq!(game, before);
    }

    /// Property: moving onto an occupied square is rejected and the board is unchanged.
    #[test]
    fn prop_occupied_square_rejected(order in cell_order(), prefix in 1usize..9, pick in 0usize..9) {
        let mut game = Game::new(PLAYERS[0], PLAYERS[1]);
        let (last, made) = play_out(&mut game, &order[..prefix]);
        prop_assume!(last == MoveOutcome::Continue);

        let before = game.clone();
        let taken = order[pick % made];
        prop_assert_eq!(game.make_move(PLAYERS[made % 2], taken), Err(InvalidMove::PositionTaken));
        prop_assert_eq!(game, before);
    }

    /// Property: coordinates outside the board are rejected for the player on turn.
    #[test]
    fn prop_out_of_range_rejected(order in cell_order(), prefix in 0usize..9, coords in out_of_range()) {
        let mut game = Game::new(PLAYERS[0], PLAYERS[1]);
        let (last, made) = play_out(&mut game, &order[..prefix]);
        prop_assume!(last == MoveOutcome::Continue);

        let before = game.clone();
        prop_assert_eq!(game.make_move(PLAYERS[made % 2], coords), Err(InvalidMove::OutOfRange));
        prop_assert_eq!(game, before);
    }

    /// Property: queries do not change between calls.
    #[test]
    fn prop_queries_idempotent(order in cell_order(), prefix in 0usize..10) {
        let mut game = Game::new(PLAYERS[0], PLAYERS[1]);
        play_out(&mut game, &order[..prefix]);

        prop_assert_eq!(game.winner().cloned(), game.winner().cloned());
        prop_assert_eq!(game.next_turn().cloned(), game.next_turn().cloned());
        prop_assert_eq!(game.board_as_string(), game.board_as_string());
    }
}
