//! Error types for timeblock.

use thiserror::Error;

/// Errors that can occur in timeblock operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ScheduleError {
    pub(crate) fn suggestion_not_found(id: &str) -> Self {
        ScheduleError::NotFound {
            kind: "Suggestion",
            id: id.to_string(),
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ScheduleError::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ScheduleError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ScheduleError::Validation(_))
    }
}

/// Result type alias for timeblock operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
