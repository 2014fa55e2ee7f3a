//! Error types for coach-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("card not found: {0}")]
    CardNotFound(i64),

    #[error("daily goal {goal} outside allowed range {min}..={max}")]
    GoalOutOfRange { goal: u32, min: u32, max: u32 },

    #[error("scheduler interval table is empty")]
    EmptyIntervalTable,
}
