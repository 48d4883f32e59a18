//! Error types for the session and configuration boundary
//!
//! Board and search operations report expected failures through their
//! return values (`bool`, `Option`); only the layers that talk to embedders
//! return `Result`.

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("unknown game session '{0}'")]
    UnknownSession(String),

    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("game already over")]
    GameOver,

    #[error("invalid move at ({row}, {col})")]
    InvalidMove { row: usize, col: usize },

    #[error("hint already used for this game")]
    HintAlreadyUsed,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("difficulty {0} is out of range (1-5)")]
    InvalidDifficulty(u8),

    #[error("board size {size} is out of range ({min}-{max})")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    #[error("session limit of {0} reached")]
    SessionLimit(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used at the session and configuration boundary
pub type Result<T> = std::result::Result<T, GameError>;
