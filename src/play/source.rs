//! Move sources: anything that can pick the next move.

use std::collections::VecDeque;

use crate::core::{Error, GameState, Result};
use crate::search::Strategy;

/// Supplies moves for one seat of a match.
///
/// A source may return an illegal move (a human typing coordinates, say);
/// the match driver rejects it and asks again.
pub trait MoveSource<S: GameState> {
    fn choose_move(&mut self, state: &S) -> Result<S::Move>;
}

/// Seats a search [`Strategy`] at the table.
#[derive(Clone, Debug, Default)]
pub struct StrategyPlayer<T> {
    strategy: T,
}

impl<T> StrategyPlayer<T> {
    #[must_use]
    pub fn new(strategy: T) -> Self {
        Self { strategy }
    }

    /// The wrapped strategy, for reading its stats.
    #[must_use]
    pub fn strategy(&self) -> &T {
        &self.strategy
    }

    pub fn into_inner(self) -> T {
        self.strategy
    }
}

impl<S: GameState, T: Strategy<S>> MoveSource<S> for StrategyPlayer<T> {
    fn choose_move(&mut self, state: &S) -> Result<S::Move> {
        self.strategy.suggest_move(state)
    }
}

/// Plays a fixed list of moves in order, then fails with `GameOver`.
///
/// Useful for replaying recorded games and for driving tests.
#[derive(Clone, Debug)]
pub struct ScriptedMoves<M> {
    moves: VecDeque<M>,
}

impl<M> ScriptedMoves<M> {
    pub fn new(moves: impl IntoIterator<Item = M>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl<S: GameState> MoveSource<S> for ScriptedMoves<S::Move> {
    fn choose_move(&mut self, _state: &S) -> Result<S::Move> {
        self.moves.pop_front().ok_or(Error::GameOver)
    }
}
