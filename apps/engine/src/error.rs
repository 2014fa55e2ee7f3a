//! Shell-facing error types.

use coach_core::CoreError;
use thiserror::Error;

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("lesson not found: {0}")]
    LessonNotFound(String),

    #[error("no lesson session is active")]
    NoActiveSession,
}
