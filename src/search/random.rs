//! Uniformly random move choice.

use crate::core::{Error, GameRng, GameState, Result};

use super::stats::SearchStats;
use super::strategy::{log_search, SearchResult, Strategy};

/// Default seed for the random strategy.
pub const DEFAULT_SEED: u64 = 42;

/// Picks any legal move with equal probability.
///
/// Seeded, so the same seed replays the same choices. The reported score
/// is the root's `rough_outcome`; no search is done.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
    stats: SearchStats,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            stats: SearchStats::default(),
        }
    }
}

impl<S: GameState> Strategy<S> for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>> {
        let moves = state.possible_next_moves();
        let best_move = self.rng.choose(&moves).cloned().ok_or(Error::GameOver)?;

        self.stats = SearchStats::default();
        let result = SearchResult {
            score: state.rough_outcome(),
            best_move,
            complete: true,
        };
        log_search(Strategy::<S>::name(self), &result, &self.stats);
        Ok(result)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
