//! Depth-bounded minimax search for rust-minimax.
//!
//! ## Overview
//!
//! The engine is a synchronous, single-threaded depth-first traversal over
//! one mutable state. Key features:
//!
//! - **Alpha-beta pruning**: Same action and value as exhaustive minimax,
//!   fewer nodes
//! - **Deterministic tie-break**: The first action to reach a new best value
//!   is kept
//! - **Root move ordering**: Optional one-ply lookahead pre-sort
//! - **Instrumentation**: Nodes explored and deepest ply per search
//! - **Random baseline**: Seeded uniform player to measure against
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::games::alignment::AlignmentState;
//! use rust_minimax::search::{MinimaxSearch, SearchConfig};
//!
//! let mut state = AlignmentState::new(3, 3).unwrap();
//! let mut search = MinimaxSearch::new(SearchConfig::new(5));
//!
//! if let Some(mut action) = search.find_best_action(&mut state) {
//!     println!("Best action: {:?}", action);
//!     println!("Nodes explored: {}", search.stats().nodes_explored);
//!     rust_minimax::core::GameState::apply_action(&mut state, &mut action);
//! }
//! ```
//!
//! ## Custom Ordering
//!
//! ```rust,ignore
//! use rust_minimax::search::{MinimaxSearch, OnePlyLookahead, SearchConfig};
//!
//! let search = MinimaxSearch::new(config).with_ordering(OnePlyLookahead);
//! ```

pub mod config;
pub mod minimax;
pub mod ordering;
pub mod random;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use config::SearchConfig;
pub use minimax::{MinimaxSearch, ScoredAction};
pub use ordering::{EnumerationOrder, MoveOrdering, OnePlyLookahead};
pub use random::RandomPlayer;
pub use stats::SearchStats;
