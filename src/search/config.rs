//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Hard ply limit below the root (must be at least 1).
    /// Nodes at this depth are scored with `evaluate()`.
    pub max_depth: u32,

    /// Pre-sort root actions by a one-ply lookahead.
    /// Changes traversal order only, never the chosen value.
    pub move_ordering: bool,

    /// Alpha-beta cutoffs (false = exhaustive minimax).
    /// Both settings choose the same action and value.
    pub pruning: bool,

    /// Return a root action that wins on the spot without searching.
    /// Only an action after which the mover is the winner qualifies; one
    /// that merely leaves the opponent without a move is still searched.
    pub take_immediate_wins: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            move_ordering: false,
            pruning: true,
            take_immediate_wins: false,
        }
    }
}

impl SearchConfig {
    /// Create a default config with the given depth bound.
    pub fn new(max_depth: u32) -> Self {
        Self::default().with_max_depth(max_depth)
    }

    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        assert!(depth > 0, "Search depth must be at least 1");
        self.max_depth = depth;
        self
    }

    /// Create a new config with root move ordering switched on or off.
    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    /// Create a new config with alpha-beta pruning switched on or off.
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    /// Create a new config with the immediate-win shortcut switched on or off.
    pub fn with_immediate_wins(mut self, enabled: bool) -> Self {
        self.take_immediate_wins = enabled;
        self
    }

    /// Check a config that did not go through the builders
    /// (e.g. deserialized from a settings file).
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::ZeroDepth);
        }
        Ok(())
    }
}
