//! Game-tree search strategies.
//!
//! ## Overview
//!
//! Every strategy works on any [`GameState`](crate::core::GameState) and
//! scores positions in negamax form: a value is always for the player to
//! move, and a parent negates its children's values.
//!
//! - [`Minimax`]: exhaustive search to the end of the game
//! - [`AlphaBeta`]: same answer as `Minimax`, prunes hopeless branches
//! - [`MemoizedMinimax`]: same answer as `Minimax`, caches positions in a
//!   [`TranspositionTable`]
//! - [`MyopicMinimax`]: stops after `lookahead` plies and trusts
//!   `rough_outcome` at the horizon
//! - [`RandomStrategy`]: any legal move, seeded
//!
//! Ties go to the first best move in `possible_next_moves` order, so all
//! exhaustive strategies agree on the move as well as the score.
//!
//! ## Usage
//!
//! ```
//! use minimax_engine::core::Player;
//! use minimax_engine::games::{SubtractSquareMove, SubtractSquareState};
//! use minimax_engine::search::{AlphaBeta, Strategy};
//!
//! let state = SubtractSquareState::new(Player::P1, 28);
//! let mut search = AlphaBeta::new();
//! let result = search.search(&state).unwrap();
//!
//! assert_eq!(result.best_move, SubtractSquareMove(16));
//! assert_eq!(result.score, 1.0);
//! ```
//!
//! ## Budgets
//!
//! A [`SearchConfig`] may carry a node or time limit. When it runs out the
//! search returns the best fully searched root move with
//! `complete == false` instead of an error.

pub mod alpha_beta;
pub mod config;
mod context;
pub mod memoize;
pub mod minimax;
pub mod myopic;
pub mod random;
pub mod stats;
pub mod strategy;

// Re-export main types
pub use alpha_beta::AlphaBeta;
pub use config::{SearchConfig, DEFAULT_LOOKAHEAD};
pub use memoize::{MemoizedMinimax, TableKey, TranspositionTable};
pub use minimax::Minimax;
pub use myopic::MyopicMinimax;
pub use random::RandomStrategy;
pub use stats::SearchStats;
pub use strategy::{SearchResult, Strategy};
