//! Root move ordering.
//!
//! Orderings are trait-based so collaborators can plug in their own:
//! - `EnumerationOrder`: keep the game's own `legal_actions()` order
//! - `OnePlyLookahead`: sort by the evaluation one ply ahead
//!
//! An ordering only changes the sequence in which root actions are
//! searched. It can change which of several equally valued actions wins
//! the tie-break, never the value itself.

use std::cmp::Reverse;

use crate::core::{GameState, Role, Score};

/// Policy for ordering root actions before the search.
pub trait MoveOrdering<S: GameState>: Send + Sync {
    /// Reorder `actions` in place. `state` must be left exactly as given.
    fn order(&self, state: &mut S, actions: &mut Vec<S::Action>);
}

/// Keep the order produced by `legal_actions()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnumerationOrder;

impl<S: GameState> MoveOrdering<S> for EnumerationOrder {
    fn order(&self, _state: &mut S, _actions: &mut Vec<S::Action>) {}
}

/// Score each action by applying it, evaluating, and undoing it.
///
/// Best-first for the side to move: descending for `Max`, ascending for
/// `Min`. The sort is stable, so equal scores keep enumeration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct OnePlyLookahead;

impl<S: GameState> MoveOrdering<S> for OnePlyLookahead {
    fn order(&self, state: &mut S, actions: &mut Vec<S::Action>) {
        let mover = state.to_move();

        let mut scored: Vec<(Score, S::Action)> = actions
            .drain(..)
            .map(|mut action| {
                state.apply_action(&mut action);
                let score = state.evaluate();
                state.undo_action(&action);
                (score, action)
            })
            .collect();

        match mover {
            Role::Max => scored.sort_by_key(|&(score, _)| Reverse(score)),
            Role::Min => scored.sort_by_key(|&(score, _)| score),
        }

        actions.extend(scored.into_iter().map(|(_, action)| action));
    }
}
