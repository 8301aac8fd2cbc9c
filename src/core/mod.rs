//! Core engine types: players, outcomes, errors, RNG, and the game state trait.
//!
//! This module contains the building blocks that are game-agnostic.
//! Games plug in by implementing `GameState`.

pub mod error;
pub mod outcome;
pub mod player;
pub mod rng;
pub mod state;

pub use error::{Error, Result};
pub use outcome::{Outcome, Score, DRAW, LOSE, WIN};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;
