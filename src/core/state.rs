//! Game state contract.
//!
//! Games implement `GameState` to expose what the search engine needs:
//! - What actions are legal for the side to move
//! - How an action mutates the board, and how to reverse it
//! - How good a position is for `Role::Max`
//! - Whether the game is over
//!
//! The engine mutates one state in place for a whole search, so
//! `apply_action` and `undo_action` must be exact inverses.

use std::fmt::Debug;

use super::player::Role;

/// Evaluation score. Positive favours `Role::Max`, negative `Role::Min`.
pub type Score = i32;

/// Mutable, undo-based game state.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Deterministic order; empty (never panicking) when the
///   side to move has no legal action
/// - `apply_action`: Must record in the action whatever `undo_action` needs
///   to restore the board, then flip the side to move
/// - `undo_action`: Called with the most recently applied action only.
///   Calls nest like a stack along each search branch
/// - `evaluate`: Pure; a won position must score beyond any heuristic value
/// - `is_terminal`: True once a role has won or the mover is stuck
///
/// Breaking the apply/undo nesting is a precondition violation with
/// unspecified results, not a recoverable error.
pub trait GameState {
    /// A move for this game, including any undo memento.
    type Action: Clone + Debug + PartialEq;

    /// The role whose turn it is.
    fn to_move(&self) -> Role;

    /// Every legal action for the side to move.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Play an action and hand the turn to the other role.
    fn apply_action(&mut self, action: &mut Self::Action);

    /// Reverse the most recent `apply_action`.
    fn undo_action(&mut self, action: &Self::Action);

    /// Heuristic or terminal score of the position.
    fn evaluate(&self) -> Score;

    /// The role that has already won, if any.
    fn winner(&self) -> Option<Role>;

    // === Convenience Methods ===

    /// Check if the game is over.
    ///
    /// Default implementation enumerates actions; games with a cheaper test
    /// should override it.
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.legal_actions().is_empty()
    }
}
