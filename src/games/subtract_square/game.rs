//! Subtract-square state and move.

use serde::{Deserialize, Serialize};

use crate::core::{Error, GameState, Player, Result, Score, DRAW, LOSE, WIN};

/// Subtract a perfect square from the running total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareMove(pub u32);

impl SubtractSquareMove {
    /// The amount subtracted.
    #[must_use]
    pub const fn amount(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubtractSquareMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subtract-square position: remaining total and the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareState {
    to_move: Player,
    current_total: u32,
}

impl SubtractSquareState {
    /// Create a game with `current_total` remaining and `to_move` to play.
    #[must_use]
    pub const fn new(to_move: Player, current_total: u32) -> Self {
        Self {
            to_move,
            current_total,
        }
    }

    /// Remaining total.
    #[must_use]
    pub const fn current_total(&self) -> u32 {
        self.current_total
    }

    /// Perfect squares `1, 4, 9, ...` not exceeding `total`.
    fn squares_up_to(total: u32) -> impl Iterator<Item = u32> {
        (1u32..)
            .map_while(|k: u32| k.checked_mul(k))
            .take_while(move |&square| square <= total)
    }

    fn is_square(total: u32) -> bool {
        Self::squares_up_to(total).any(|square| square == total)
    }
}

impl GameState for SubtractSquareState {
    type Move = SubtractSquareMove;
    type Key = u32;

    fn player_to_move(&self) -> Player {
        self.to_move
    }

    fn possible_next_moves(&self) -> Vec<SubtractSquareMove> {
        Self::squares_up_to(self.current_total)
            .map(SubtractSquareMove)
            .collect()
    }

    fn apply_move(&self, mv: &SubtractSquareMove) -> Result<Self> {
        if mv.0 == 0 || mv.0 > self.current_total || !Self::is_square(mv.0) {
            return Err(Error::illegal_move(mv));
        }
        Ok(Self {
            to_move: self.to_move.opponent(),
            current_total: self.current_total - mv.0,
        })
    }

    fn winner(&self, player: Player) -> bool {
        // Whoever took the last counter is not the one left to move.
        self.current_total == 0 && self.to_move != player
    }

    fn rough_outcome(&self) -> Score {
        if self.current_total == 0 {
            LOSE
        } else if Self::is_square(self.current_total) {
            WIN
        } else if Self::squares_up_to(self.current_total)
            .all(|square| Self::is_square(self.current_total - square))
        {
            LOSE
        } else {
            DRAW
        }
    }

    fn transposition_key(&self) -> u32 {
        self.current_total
    }

    fn is_over(&self) -> bool {
        self.current_total == 0
    }
}

impl std::fmt::Display for SubtractSquareState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Current total: {}; next player: {}",
            self.current_total, self.to_move
        )
    }
}
