//! # rust-minimax
//!
//! Depth-bounded adversarial search over mutable, undo-based game states.
//!
//! ## Design Principles
//!
//! 1. **One State, Mutated In Place**: The engine never clones a state.
//!    Every branch applies an action, recurses, then undoes it.
//!
//! 2. **Game-Agnostic Engine**: Search only talks to the `GameState` trait.
//!    Games own their rules, move order and evaluation.
//!
//! 3. **Deterministic Results**: The same state and configuration always
//!    yield the same action, value and statistics.
//!
//! ## Modules
//!
//! - `core`: Roles, boards, the `GameState` contract, errors
//! - `search`: Minimax with alpha-beta pruning, move ordering, statistics,
//!   random baseline player
//! - `games`: K-in-a-row alignment and the 8×8 capture race

pub mod core;
pub mod games;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Error, GameState, Result, Role, RoleMap, Score};

pub use crate::games::alignment::{AlignmentAction, AlignmentState};
pub use crate::games::race::{RaceAction, RaceState};

pub use crate::search::{
    EnumerationOrder, MinimaxSearch, MoveOrdering, OnePlyLookahead, RandomPlayer, ScoredAction,
    SearchConfig, SearchStats,
};
