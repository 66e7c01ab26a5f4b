//! Bounded model checking of the move loop.
//!
//! Run with `cargo kani --features kani`.

mod proofs {
    use crate::{Game, GameInvariants, InvalidMove, InvariantSet, MoveOutcome, Seat};

    fn any_coord() -> (usize, usize) {
        let row: usize = kani::any();
        let col: usize = kani::any();
        kani::assume(row < 4 && col < 4);
        (row, col)
    }

    /// Any sequence of attempted moves keeps every invariant.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_invariants_hold_for_any_play() {
        let mut game = Game::new("a", "b");
        for _ in 0..10 {
            let seat = if kani::any() { Seat::First } else { Seat::Second };
            let player = game.player(seat).clone();
            let _ = game.make_move(&player, any_coord());
            assert!(GameInvariants::check_all(&game).is_ok());
        }
    }

    /// A rejected move never mutates the game.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_rejection_is_pure() {
        let mut game = Game::new("a", "b");
        for _ in 0..4 {
            let player = game.player(Seat::First).clone();
            let before = game.clone();
            match game.make_move(&player, any_coord()) {
                Err(InvalidMove::OutOfRange | InvalidMove::PositionTaken | InvalidMove::GameIsOver) => {
                    assert!(game == before)
                }
                Err(InvalidMove::NotYourTurn { .. }) => assert!(game == before),
                Ok(MoveOutcome::Continue | MoveOutcome::GameOver(_)) => {}
            }
        }
    }
}
