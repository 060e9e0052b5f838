//! Core types: roles, boards, the game state contract, errors.
//!
//! Everything here is game-agnostic. Concrete games live in `games` and the
//! search engine in `search`.

pub mod board;
pub mod error;
pub mod player;
pub mod state;

pub use board::{Board, Cell};
pub use error::{Error, Result};
pub use player::{Role, RoleMap};
pub use state::{GameState, Score};
