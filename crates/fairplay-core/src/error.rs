//! Error types shared by every layer of the game.

use thiserror::Error;

/// Reasons a list of move names cannot form a [`MoveSet`](crate::games::MoveSet).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least 3 moves are required, got {count}")]
    TooFewMoves { count: usize },

    #[error("the number of moves must be odd, got {count}")]
    EvenCount { count: usize },

    #[error("duplicate move: {0}")]
    DuplicateMove(String),
}

/// Errors from game setup, play and verification
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Invalid input {0:?}. Please enter a valid move number.")]
    InvalidInput(String),

    #[error("Move is not part of the configured set: {0}")]
    InvalidMove(String),

    #[error("Secure randomness or MAC primitive unavailable: {0}")]
    CryptoUnavailable(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Malformed transcript: {0}")]
    Transcript(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
