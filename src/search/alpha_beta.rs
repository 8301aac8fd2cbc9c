//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the score the side to move can already force, `beta` the
//! score its opponent can already force (seen from the side to move). Both
//! are handed to the child negated and swapped, and a node stops scanning
//! its moves once `alpha >= beta`.

use crate::core::{GameState, Result, Score};

use super::config::SearchConfig;
use super::context::{Halt, SearchContext};
use super::stats::SearchStats;
use super::strategy::{log_search, search_root, SearchResult, Strategy};

/// Alpha-beta pruned minimax.
///
/// Returns the same root score and move as [`Minimax`](super::Minimax)
/// while visiting fewer nodes.
#[derive(Clone, Debug, Default)]
pub struct AlphaBeta {
    config: SearchConfig,
    stats: SearchStats,
}

impl AlphaBeta {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an alpha-beta search with a node or time budget.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SearchStats::default(),
        })
    }
}

fn negamax<S: GameState>(
    ctx: &mut SearchContext,
    state: &S,
    mut alpha: Score,
    beta: Score,
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
        best = best.max(-negamax(ctx, &child, -beta, -alpha, depth + 1)?);
        alpha = alpha.max(best);
        if alpha >= beta {
            ctx.stats.cutoffs += 1;
            break;
        }
    }
    Ok(best)
}

impl<S: GameState> Strategy<S> for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>> {
        let mut ctx = SearchContext::new(&self.config);
        // The root window is (best so far, +inf); each child sees it negated.
        let result = search_root(state, |child, alpha| {
            Ok(-negamax(&mut ctx, child, f64::NEG_INFINITY, -alpha, 1)?)
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
