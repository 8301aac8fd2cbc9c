//! Subtract-square counting game.
//!
//! - Players share a running total
//! - On your turn: subtract any perfect square no larger than the total
//! - The player who brings the total to 0 wins

mod game;

pub use game::{SubtractSquareMove, SubtractSquareState};
