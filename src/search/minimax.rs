//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! One call to `find_best_action` is one complete depth-first traversal of
//! a single, exclusively borrowed state. Every branch applies an action,
//! recurses, and undoes the action before the next sibling is tried, so
//! the state is handed back exactly as it was received.

use tracing::{debug, trace};

use crate::core::{GameState, Role, Score};

use super::config::SearchConfig;
use super::ordering::{EnumerationOrder, MoveOrdering, OnePlyLookahead};
use super::stats::SearchStats;

/// Lower bound of the search window. Evaluations never reach it.
const NEG_INFINITY: Score = Score::MIN;

/// Upper bound of the search window. Evaluations never reach it.
const POS_INFINITY: Score = Score::MAX;

/// An action chosen at the root together with its backed-up value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredAction<A> {
    pub action: A,
    pub value: Score,
}

/// Minimax search context.
///
/// Generic over the game state type. Owns the configuration, the root
/// ordering policy and the statistics of the last search.
pub struct MinimaxSearch<S: GameState> {
    /// Search configuration.
    config: SearchConfig,

    /// Root ordering policy.
    ordering: Box<dyn MoveOrdering<S>>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl<S: GameState> MinimaxSearch<S> {
    /// Create a new search context.
    ///
    /// Uses `OnePlyLookahead` when `config.move_ordering` is set, otherwise
    /// `EnumerationOrder`.
    pub fn new(config: SearchConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid search config: {:?}", config);

        let ordering: Box<dyn MoveOrdering<S>> = if config.move_ordering {
            Box::new(OnePlyLookahead)
        } else {
            Box::new(EnumerationOrder)
        };

        Self {
            config,
            ordering,
            stats: SearchStats::default(),
        }
    }

    /// Set a custom root ordering policy.
    pub fn with_ordering<O: MoveOrdering<S> + 'static>(mut self, ordering: O) -> Self {
        self.ordering = Box::new(ordering);
        self
    }

    /// Choose an action for the side to move.
    ///
    /// Returns `None` when the state is terminal or the mover has no
    /// legal action.
    pub fn find_best_action(&mut self, state: &mut S) -> Option<S::Action> {
        self.find_best(state).map(|best| best.action)
    }

    /// Choose an action for the side to move, with its minimax value.
    pub fn find_best(&mut self, state: &mut S) -> Option<ScoredAction<S::Action>> {
        self.stats.reset();

        if state.is_terminal() {
            return None;
        }

        let mut actions = state.legal_actions();
        if actions.is_empty() {
            return None;
        }

        let root = state.to_move();

        if self.config.take_immediate_wins {
            if let Some(win) = immediate_win(state, &actions, root) {
                debug!(action = ?win.action, value = win.value, "immediate win");
                return Some(win);
            }
        }

        self.ordering.order(state, &mut actions);

        let mut alpha = NEG_INFINITY;
        let mut beta = POS_INFINITY;
        let mut best_value = match root {
            Role::Max => NEG_INFINITY,
            Role::Min => POS_INFINITY,
        };
        let mut best = None;

        for mut action in actions {
            state.apply_action(&mut action);
            let value = match state.to_move() {
                Role::Min => self.min_value(state, 1, alpha, beta),
                Role::Max => self.max_value(state, 1, alpha, beta),
            };
            state.undo_action(&action);

            trace!(?action, value, "root action");

            // Strict comparison: the first action reaching a new best keeps it.
            match root {
                Role::Max => {
                    if value > best_value {
                        best_value = value;
                        best = Some(ScoredAction { action, value });
                    }
                    alpha = alpha.max(value);
                }
                Role::Min => {
                    if value < best_value {
                        best_value = value;
                        best = Some(ScoredAction { action, value });
                    }
                    beta = beta.min(value);
                }
            }
        }

        debug!(
            nodes = self.stats.nodes_explored,
            max_depth = self.stats.max_depth_reached,
            value = best_value,
            "search complete"
        );

        best
    }

    fn max_value(&mut self, state: &mut S, depth: u32, mut alpha: Score, beta: Score) -> Score {
        self.stats.record_visit(depth);

        if state.is_terminal() || depth >= self.config.max_depth {
            return state.evaluate();
        }

        let mut value = NEG_INFINITY;
        for mut action in state.legal_actions() {
            state.apply_action(&mut action);
            value = value.max(self.min_value(state, depth + 1, alpha, beta));
            state.undo_action(&action);

            alpha = alpha.max(value);
            if self.config.pruning && beta <= alpha {
                break;
            }
        }
        value
    }

    fn min_value(&mut self, state: &mut S, depth: u32, alpha: Score, mut beta: Score) -> Score {
        self.stats.record_visit(depth);

        if state.is_terminal() || depth >= self.config.max_depth {
            return state.evaluate();
        }

        let mut value = POS_INFINITY;
        for mut action in state.legal_actions() {
            state.apply_action(&mut action);
            value = value.min(self.max_value(state, depth + 1, alpha, beta));
            state.undo_action(&action);

            beta = beta.min(value);
            if self.config.pruning && beta <= alpha {
                break;
            }
        }
        value
    }

    /// Get statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// First action, in enumeration order, after which `root` has won.
fn immediate_win<S: GameState>(
    state: &mut S,
    actions: &[S::Action],
    root: Role,
) -> Option<ScoredAction<S::Action>> {
    for action in actions {
        let mut action = action.clone();
        state.apply_action(&mut action);
        let won = state.winner() == Some(root);
        let value = state.evaluate();
        state.undo_action(&action);

        if won {
            return Some(ScoredAction { action, value });
        }
    }
    None
}
