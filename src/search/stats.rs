//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax search.
///
/// Only `min_value`/`max_value` invocations are counted; the root call
/// itself is not a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited below the root.
    pub nodes_explored: u64,

    /// Deepest ply visited (never exceeds the configured depth).
    pub max_depth_reached: u32,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one visited node at `depth`.
    pub(crate) fn record_visit(&mut self, depth: u32) {
        self.nodes_explored += 1;
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }

    /// Fold another search's statistics into a running total
    /// (e.g. across all moves of a game).
    pub fn accumulate(&mut self, other: &SearchStats) {
        self.nodes_explored += other.nodes_explored;
        self.max_depth_reached = self.max_depth_reached.max(other.max_depth_reached);
    }

    /// Effective branching factor: `b` such that `b^depth ≈ nodes`.
    #[must_use]
    pub fn effective_branching_factor(&self) -> f64 {
        if self.max_depth_reached == 0 {
            0.0
        } else {
            (self.nodes_explored as f64).powf(1.0 / self.max_depth_reached as f64)
        }
    }
}
