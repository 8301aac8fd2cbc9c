//! Strategy trait and the root move selection shared by every search.

use tracing::{debug, warn};

use crate::core::{Error, GameState, Result, Score};

use super::context::Halt;
use super::stats::SearchStats;

/// Outcome of one search call.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    /// Value of the root for the player to move.
    pub score: Score,

    /// The chosen move.
    pub best_move: M,

    /// False if the budget ran out and `best_move` is a best-effort pick.
    pub complete: bool,
}

/// Move-selection policy.
///
/// Strategies take `&mut self` because they record statistics and, for the
/// memoizing variant, fill a transposition table.
pub trait Strategy<S: GameState> {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Search `state` and return the best move with its score.
    ///
    /// Returns `Error::GameOver` if `state` has no legal moves.
    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>>;

    /// Statistics from the most recent search.
    fn stats(&self) -> &SearchStats;

    /// The move this strategy would play from `state`.
    fn suggest_move(&mut self, state: &S) -> Result<S::Move> {
        self.search(state).map(|result| result.best_move)
    }
}

/// Score every root move with `evaluate` and keep the first maximum.
///
/// `evaluate` receives the child state and the best root score so far and
/// returns the child's value for the root player. If the budget runs out,
/// the best fully scored move is returned, or the first legal move when
/// none finished.
pub(crate) fn search_root<S: GameState>(
    state: &S,
    mut evaluate: impl FnMut(&S, Score) -> std::result::Result<Score, Halt>,
) -> Result<SearchResult<S::Move>> {
    let moves = state.possible_next_moves();
    if moves.is_empty() {
        return Err(Error::GameOver);
    }

    let mut best: Option<(Score, &S::Move)> = None;
    let mut complete = true;

    for mv in &moves {
        let child = state.apply_move(mv)?;
        let alpha = best.map_or(f64::NEG_INFINITY, |(score, _)| score);
        match evaluate(&child, alpha) {
            Ok(score) => {
                if best.map_or(true, |(best_score, _)| score > best_score) {
                    best = Some((score, mv));
                }
            }
            Err(Halt::Budget) => {
                complete = false;
                break;
            }
            Err(Halt::Failed(err)) => return Err(err),
        }
    }

    let (score, best_move) = match best {
        Some((score, mv)) => (score, mv.clone()),
        None => (state.rough_outcome(), moves[0].clone()),
    };

    Ok(SearchResult {
        score,
        best_move,
        complete,
    })
}

pub(crate) fn log_search<M: std::fmt::Display>(
    strategy: &'static str,
    result: &SearchResult<M>,
    stats: &SearchStats,
) {
    if !result.complete {
        warn!(
            strategy,
            nodes = stats.nodes_visited,
            "search budget exhausted, returning best move so far"
        );
    }
    debug!(
        strategy,
        best_move = %result.best_move,
        score = result.score,
        nodes = stats.nodes_visited,
        cutoffs = stats.cutoffs,
        cache_hits = stats.cache_hits,
        time_us = stats.time_us,
        "search finished"
    );
}
