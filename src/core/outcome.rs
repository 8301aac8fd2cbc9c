//! Game values.
//!
//! Scores are always from the perspective of the player to move, so a
//! parent negates its child's score (negamax).

use serde::{Deserialize, Serialize};

/// Search score in `[-1.0, 1.0]`.
pub type Score = f64;

/// Score of a won position.
pub const WIN: Score = 1.0;
/// Score of a lost position.
pub const LOSE: Score = -1.0;
/// Score of a drawn position.
pub const DRAW: Score = 0.0;

/// Result of a finished game for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Numeric value used by the search.
    #[must_use]
    pub const fn score(self) -> Score {
        match self {
            Outcome::Win => WIN,
            Outcome::Lose => LOSE,
            Outcome::Draw => DRAW,
        }
    }

    /// The same result seen by the opponent.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}
