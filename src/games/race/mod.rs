//! Capture race on an 8×8 board.
//!
//! - `Role::Max` (X) starts on rows 6-7 and moves first, toward row 0
//! - `Role::Min` (O) starts on rows 0-1 and moves toward row 7
//! - A piece steps one row forward: straight onto an empty cell, or
//!   diagonally onto an empty cell or an opposing piece (capturing it)
//! - The first role to reach its goal row wins
//! - A side with no legal move ends the game without a winner
//!
//! Captures are recorded in the action, so undo can put the piece back.

pub mod eval;
mod game;

pub use game::{RaceAction, RaceState, BOARD_SIZE};
