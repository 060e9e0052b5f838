//! Uniform random baseline player.
//!
//! Picks any legal action with equal probability. Useful as a weak
//! opponent when measuring the minimax player. Seeded, so a game against
//! it replays exactly.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::GameState;

/// Seeded random move chooser.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomPlayer {
    /// Create a player with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this player was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a legal action for the side to move.
    ///
    /// Returns `None` when the state is terminal or the mover has no legal
    /// action.
    pub fn choose_action<S: GameState>(&mut self, state: &S) -> Option<S::Action> {
        if state.is_terminal() {
            return None;
        }
        state.legal_actions().choose(&mut self.rng).cloned()
    }
}
