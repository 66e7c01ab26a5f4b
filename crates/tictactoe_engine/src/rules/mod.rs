//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so that move validation and invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{COMBINATIONS, check_winner, completes_line};
