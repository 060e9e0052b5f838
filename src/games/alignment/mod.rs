//! K-in-a-row alignment game.
//!
//! - Two roles alternately mark empty cells of an N×N board
//! - `Role::Max` (X) moves first
//! - The first role to own `alignment` consecutive cells along a row,
//!   column or diagonal wins
//! - A full board without a run is a draw
//!
//! Marks are never moved or removed, so undo only clears the cell.

mod game;

pub use game::{AlignmentAction, AlignmentState, MARK_VALUE, WIN_SCORE};
