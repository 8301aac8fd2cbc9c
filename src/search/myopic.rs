//! Depth-limited ("myopic") minimax.
//!
//! Searches `lookahead` plies and scores unfinished positions at the
//! horizon with `rough_outcome`. This is a deliberately weaker opponent:
//! it can walk into losses a full search would avoid, and deeper lookahead
//! is not guaranteed to play better.

use crate::core::{GameState, Result, Score};

use super::config::SearchConfig;
use super::context::{Halt, SearchContext};
use super::stats::SearchStats;
use super::strategy::{log_search, search_root, SearchResult, Strategy};

/// Minimax cut off after a fixed number of plies.
#[derive(Clone, Debug, Default)]
pub struct MyopicMinimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl MyopicMinimax {
    /// Look `lookahead` plies ahead.
    ///
    /// The root's moves are always expanded, so 0 and 1 behave the same.
    #[must_use]
    pub fn new(lookahead: u32) -> Self {
        Self {
            config: SearchConfig::default().with_lookahead(lookahead),
            stats: SearchStats::default(),
        }
    }

    /// Create from a full configuration (lookahead plus optional budget).
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SearchStats::default(),
        })
    }

    /// Plies searched before the heuristic takes over.
    #[must_use]
    pub fn lookahead(&self) -> u32 {
        self.config.lookahead
    }
}

fn negamax<S: GameState>(
    ctx: &mut SearchContext,
    state: &S,
    remaining: u32,
    depth: u32,
) -> std::result::Result<Score, Halt> {
    ctx.visit(depth)?;

    let moves = state.possible_next_moves();
    if moves.is_empty() {
        return Ok(state.outcome()?.score());
    }
    if remaining == 0 {
        ctx.stats.heuristic_evals += 1;
        return Ok(state.rough_outcome());
    }

    let mut best = f64::NEG_INFINITY;
    for mv in &moves {
        let child = state.apply_move(mv)?;
        best = best.max(-negamax(ctx, &child, remaining - 1, depth + 1)?);
    }
    Ok(best)
}

impl<S: GameState> Strategy<S> for MyopicMinimax {
    fn name(&self) -> &'static str {
        "myopic-minimax"
    }

    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>> {
        let mut ctx = SearchContext::new(&self.config);
        let below_root = self.config.lookahead.saturating_sub(1);
        let result = search_root(state, |child, _| {
            Ok(-negamax(&mut ctx, child, below_root, 1)?)
        });
        self.stats = ctx.finish();

        let result = result?;
        log_search(Strategy::<S>::name(self), &result, &self.stats);
        Ok(result)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
