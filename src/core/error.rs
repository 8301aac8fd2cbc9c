//! Error types for the search engine.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: {mv}")]
    IllegalMove { mv: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("game already over")]
    GameOver,

    #[error("game is not over yet")]
    GameNotOver,
}

impl Error {
    pub(crate) fn illegal_move(mv: impl std::fmt::Display) -> Self {
        Error::IllegalMove { mv: mv.to_string() }
    }

    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
