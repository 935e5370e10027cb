//! Error types for the scoring engine

use thiserror::Error;

/// Scoring engine error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A roll was submitted after the tenth frame was resolved.
    #[error("game already ended, rolls are not allowed")]
    AlreadyOver,
}

/// Result type alias
pub type GameResult<T> = Result<T, GameError>;
