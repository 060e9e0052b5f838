//! Concrete games implementing `GameState`.

pub mod alignment;
pub mod race;
