//! Errors for board construction and collaborator input.
//!
//! The search path itself is infallible. These errors cover the edges where
//! outside input enters the crate: board dimensions, text diagrams, moves
//! entered by a human, and search configuration loaded from disk.

use thiserror::Error;

use super::board::Cell;
use super::player::Role;

/// Errors raised while building states or validating outside input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("board must have at least one row")]
    EmptyBoard,

    #[error("alignment {alignment} does not fit a {size}x{size} board")]
    InvalidAlignment { size: usize, alignment: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unrecognized glyph {glyph:?} at {cell}")]
    UnknownGlyph { glyph: char, cell: Cell },

    #[error("expected a {expected}x{expected} board, found {found}x{found}")]
    WrongSize { expected: usize, found: usize },

    #[error("cell {0} is off the board")]
    OutOfBounds(Cell),

    #[error("cell {0} is already occupied")]
    Occupied(Cell),

    #[error("{role} has no move from {from} to {to}")]
    IllegalMove { role: Role, from: Cell, to: Cell },

    #[error("the game is already over")]
    GameOver,

    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;
