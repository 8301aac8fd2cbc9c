//! Playing full games.
//!
//! No I/O happens here: a front end implements [`MoveSource`] for whatever
//! reads moves (a terminal, a socket) and renders states with `Display`.
//!
//! ```
//! use minimax_engine::core::Player;
//! use minimax_engine::games::SubtractSquareState;
//! use minimax_engine::play::{play_game, MatchConfig, StrategyPlayer};
//! use minimax_engine::search::{Minimax, RandomStrategy};
//!
//! let root = SubtractSquareState::new(Player::P1, 29);
//! let mut p1 = StrategyPlayer::new(Minimax::new());
//! let mut p2 = StrategyPlayer::new(RandomStrategy::new(3));
//!
//! let record = play_game(root, &mut p1, &mut p2, &MatchConfig::default()).unwrap();
//! assert_eq!(record.winner, Some(Player::P1));
//! ```

pub mod game;
pub mod source;

pub use game::{play_game, MatchConfig, MatchRecord, DEFAULT_MAX_ILLEGAL_ATTEMPTS};
pub use source::{MoveSource, ScriptedMoves, StrategyPlayer};
