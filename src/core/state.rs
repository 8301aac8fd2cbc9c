//! Game state trait for game implementations.
//!
//! Games implement `GameState` to define:
//! - Legal moves from a position
//! - How a move produces the next position
//! - Win/loss conditions and a cheap heuristic
//!
//! The search engine calls into `GameState` but never interprets
//! game-specific concepts directly.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use super::error::{Error, Result};
use super::outcome::{Outcome, Score};
use super::player::Player;

/// Immutable snapshot of a two-player, zero-sum, perfect-information game.
///
/// ## Implementation Notes
///
/// - `apply_move` must not mutate `self`; it returns the successor state
///   with the opponent to move.
/// - `possible_next_moves` is empty exactly when the game is over, and its
///   order is deterministic (the search breaks ties by it).
/// - `outcome` and `rough_outcome` are scored from the perspective of
///   `player_to_move`.
pub trait GameState: Clone + Debug + Display {
    /// A single legal transition.
    type Move: Clone + Debug + Display + PartialEq + Eq + Hash;

    /// Structural identity of the position, excluding whose turn it is.
    type Key: Clone + Debug + PartialEq + Eq + Hash;

    /// The player whose perspective scores are given from.
    ///
    /// Defined for finished games too: it is the player who would move next.
    fn player_to_move(&self) -> Player;

    /// Legal moves from this state, or empty if the game has ended.
    fn possible_next_moves(&self) -> Vec<Self::Move>;

    /// The state reached by playing `mv`.
    ///
    /// Returns `Error::IllegalMove` if `mv` is not currently legal.
    fn apply_move(&self, mv: &Self::Move) -> Result<Self>;

    /// Whether `player` has won. False while the game is in progress.
    fn winner(&self, player: Player) -> bool;

    /// Cheap static estimate in `[-1.0, 1.0]` of the value for the player to move.
    fn rough_outcome(&self) -> Score;

    /// Position key used by transposition tables.
    fn transposition_key(&self) -> Self::Key;

    /// Whether no further moves exist.
    fn is_over(&self) -> bool {
        self.possible_next_moves().is_empty()
    }

    /// The player to move, or `None` once the game is over.
    fn next_player(&self) -> Option<Player> {
        if self.is_over() {
            None
        } else {
            Some(self.player_to_move())
        }
    }

    /// Result of a finished game for the player to move.
    ///
    /// Returns `Error::GameNotOver` while moves remain.
    fn outcome(&self) -> Result<Outcome> {
        if !self.is_over() {
            return Err(Error::GameNotOver);
        }
        let me = self.player_to_move();
        Ok(if self.winner(me) {
            Outcome::Win
        } else if self.winner(me.opponent()) {
            Outcome::Lose
        } else {
            Outcome::Draw
        })
    }
}
