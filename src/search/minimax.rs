//! Plain full-depth minimax in negamax form.

use crate::core::{GameState, Result, Score};

use super::config::SearchConfig;
use super::context::{Halt, SearchContext};
use super::stats::SearchStats;
use super::strategy::{log_search, search_root, SearchResult, Strategy};

/// Exhaustive minimax.
///
/// Every legal move is searched to the end of the game. Among moves with
/// the best score, the first in `possible_next_moves` order wins.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a minimax search with a node or time budget.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SearchStats::default(),
        })
    }
}

/// Value of `state` for its player to move.
fn negamax<S: GameState>(
    ctx: &mut SearchContext,
    state: &S,
    depth: u32,
) -> std::result::Result<Score, Halt> {
    ctx.visit(depth)?;

    let moves = state.possible_next_moves();
    if moves.is_empty() {
        return Ok(state.outcome()?.score());
    }

    let mut best = f64::NEG_INFINITY;
    for mv in &moves {
        let child = state.apply_move(mv)?;
        best = best.max(-negamax(ctx, &child, depth + 1)?);
    }
    Ok(best)
}

impl<S: GameState> Strategy<S> for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>> {
        let mut ctx = SearchContext::new(&self.config);
        let result = search_root(state, |child, _| Ok(-negamax(&mut ctx, child, 1)?));
        self.stats = ctx.finish();

        let result = result?;
        log_search(Strategy::<S>::name(self), &result, &self.stats);
        Ok(result)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
