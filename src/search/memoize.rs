//! Minimax with a transposition table.
//!
//! ## Cache scope
//!
//! `MemoizedMinimax::new()` owns a private table. To share results between
//! strategy instances (or across games with the same rules), build one
//! [`TranspositionTable`] and hand clones of it to
//! [`MemoizedMinimax::with_table`]; clones share storage.
//!
//! ```
//! use minimax_engine::core::Player;
//! use minimax_engine::games::SubtractSquareState;
//! use minimax_engine::search::{MemoizedMinimax, Strategy, TranspositionTable};
//!
//! let table = TranspositionTable::new();
//! let mut first = MemoizedMinimax::with_table(table.clone());
//! let mut second = MemoizedMinimax::with_table(table.clone());
//!
//! let state = SubtractSquareState::new(Player::P1, 27);
//! let a = first.search(&state).unwrap();
//! let b = second.search(&state).unwrap();
//!
//! assert_eq!(a.best_move, b.best_move);
//! assert!(!table.is_empty());
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::core::{GameState, Player, Result, Score};

use super::config::SearchConfig;
use super::context::{Halt, SearchContext};
use super::stats::SearchStats;
use super::strategy::{log_search, search_root, SearchResult, Strategy};

/// Table key: position plus the player to move there.
///
/// Scores are relative to the mover, so the same position with the other
/// player to move is a different entry.
pub type TableKey<K> = (K, Option<Player>);

/// Shared map from position to its score for the player to move.
///
/// Cloning yields a handle to the same storage. Each lookup and insert
/// takes the lock once.
#[derive(Debug)]
pub struct TranspositionTable<K> {
    entries: Arc<Mutex<FxHashMap<TableKey<K>, Score>>>,
}

impl<K> Clone for TranspositionTable<K> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K> Default for TranspositionTable<K> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }
}

impl<K: std::hash::Hash + Eq> TranspositionTable<K> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<TableKey<K>, Score>> {
        // Entries are plain scores; a panic elsewhere cannot leave one half-written.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stored score for `key`.
    #[must_use]
    pub fn get(&self, key: &TableKey<K>) -> Option<Score> {
        self.lock().get(key).copied()
    }

    /// Store the score for `key`.
    pub fn insert(&self, key: TableKey<K>, score: Score) {
        self.lock().insert(key, score);
    }

    /// Number of stored positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every entry (for all handles).
    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// Memoized minimax.
///
/// Same recursion and tie-break as [`Minimax`](super::Minimax), but a
/// child's score is looked up before recursing into it and stored after.
#[derive(Debug)]
pub struct MemoizedMinimax<S: GameState> {
    config: SearchConfig,
    table: TranspositionTable<S::Key>,
    stats: SearchStats,
}

impl<S: GameState> Default for MemoizedMinimax<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> MemoizedMinimax<S> {
    /// Create a search with its own empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(TranspositionTable::new())
    }

    /// Create a search that reads and fills `table`.
    #[must_use]
    pub fn with_table(table: TranspositionTable<S::Key>) -> Self {
        Self {
            config: SearchConfig::default(),
            table,
            stats: SearchStats::default(),
        }
    }

    /// Set a node or time budget.
    pub fn with_config(mut self, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The table this search uses.
    #[must_use]
    pub fn table(&self) -> &TranspositionTable<S::Key> {
        &self.table
    }
}

/// Score of `child` for its own mover, from the table or by search.
fn lookup_or_search<S: GameState>(
    ctx: &mut SearchContext,
    table: &TranspositionTable<S::Key>,
    child: &S,
    depth: u32,
) -> std::result::Result<Score, Halt> {
    let key = (child.transposition_key(), child.next_player());
    if let Some(score) = table.get(&key) {
        ctx.stats.cache_hits += 1;
        trace!(depth, score, "transposition hit");
        return Ok(score);
    }
    ctx.stats.cache_misses += 1;

    let score = negamax(ctx, table, child, depth)?;
    table.insert(key, score);
    Ok(score)
}

fn negamax<S: GameState>(
    ctx: &mut SearchContext,
    table: &TranspositionTable<S::Key>,
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
        best = best.max(-lookup_or_search(ctx, table, &child, depth + 1)?);
    }
    Ok(best)
}

impl<S: GameState> Strategy<S> for MemoizedMinimax<S> {
    fn name(&self) -> &'static str {
        "memoized-minimax"
    }

    fn search(&mut self, state: &S) -> Result<SearchResult<S::Move>> {
        let mut ctx = SearchContext::new(&self.config);
        let table = &self.table;
        let result = search_root(state, |child, _| {
            Ok(-lookup_or_search(&mut ctx, table, child, 1)?)
        });
        self.stats = ctx.finish();

        let result = result?;
        log_search(self.name(), &result, &self.stats);
        Ok(result)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
