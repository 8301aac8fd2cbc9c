//! # minimax-engine
//!
//! Game-tree search for two-player, zero-sum, perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: Strategies only see the `GameState` trait.
//!    A game supplies its moves, transitions, end condition and a rough
//!    heuristic, and every strategy works on it unchanged.
//!
//! 2. **Negamax Scores**: A score is always from the point of view of the
//!    player to move, in {-1, 0, 1} for exact results and in [-1, 1] for
//!    heuristic ones.
//!
//! 3. **Immutable States**: `apply_move` returns a new state. Boards use
//!    `im-rs` persistent vectors so children share structure with parents.
//!
//! ## Modules
//!
//! - `core`: players, outcomes, errors, RNG, and the `GameState` trait
//! - `games`: subtract-square and tippy
//! - `search`: minimax, alpha-beta, memoized, myopic and random strategies
//! - `play`: I/O-free match driver over `MoveSource`s

pub mod core;
pub mod games;
pub mod play;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Error, GameRng, GameState, Outcome, Player, PlayerMap, Result, Score};

pub use crate::games::{SubtractSquareMove, SubtractSquareState, TippyMove, TippyState};

pub use crate::play::{play_game, MatchConfig, MatchRecord, MoveSource, StrategyPlayer};

pub use crate::search::{
    AlphaBeta, MemoizedMinimax, Minimax, MyopicMinimax, RandomStrategy, SearchConfig,
    SearchResult, SearchStats, Strategy, TranspositionTable,
};
