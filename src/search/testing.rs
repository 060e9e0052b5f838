//! Minimal game for engine unit tests.
//!
//! Players alternately take 1 or 2 stones from a pile; whoever takes the
//! last stone wins. A pile that is a multiple of 3 is lost for the mover.

use crate::core::{GameState, Role, Score};

pub(crate) const PILE_WIN: Score = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Take(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Pile {
    pub stones: u32,
    pub to_move: Role,
}

impl Pile {
    pub(crate) fn new(stones: u32, to_move: Role) -> Self {
        Self { stones, to_move }
    }
}

impl GameState for Pile {
    type Action = Take;

    fn to_move(&self) -> Role {
        self.to_move
    }

    fn legal_actions(&self) -> Vec<Take> {
        (1..=2).filter(|&n| n <= self.stones).map(Take).collect()
    }

    fn apply_action(&mut self, action: &mut Take) {
        self.stones -= action.0;
        self.to_move = self.to_move.opponent();
    }

    fn undo_action(&mut self, action: &Take) {
        self.stones += action.0;
        self.to_move = self.to_move.opponent();
    }

    fn evaluate(&self) -> Score {
        self.winner().map_or(0, |role| role.sign() * PILE_WIN)
    }

    fn winner(&self) -> Option<Role> {
        // The side that emptied the pile has just handed over the turn.
        (self.stones == 0).then_some(self.to_move.opponent())
    }
}
