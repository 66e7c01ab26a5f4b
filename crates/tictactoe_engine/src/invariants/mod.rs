//! Composable invariants over game state.
//!
//! An [`Invariant`] is a named predicate. Tuples of invariants form an
//! [`InvariantSet`] that reports every violation at once, not just the first.

use super::game::Game;
use tracing::warn;

/// A property that must hold for every reachable state.
pub trait Invariant<S> {
    /// Returns true if the invariant holds for `state`.
    fn holds(state: &S) -> bool;

    /// Human-readable statement of the invariant.
    fn description() -> &'static str;
}

/// A violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Which invariant failed.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation record.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A group of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every member, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod balance;
pub mod turn;
pub mod winner;

pub use balance::MarksBalanced;
pub use turn::{TurnClearedWhenTerminal, TurnFollowsMarks};
pub use winner::WinnerHoldsLine;

/// Every invariant of a tic-tac-toe game.
pub type GameInvariants = (
    MarksBalanced,
    TurnFollowsMarks,
    TurnClearedWhenTerminal,
    WinnerHoldsLine,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = GameInvariants::check_all(game) {
        for v in &violations {
            warn!(invariant = %v.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Game invariants violated: {:?}", violations);
    }
}
