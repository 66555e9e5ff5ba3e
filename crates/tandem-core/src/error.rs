// Rust guideline compliant 2026-02-06

//! Error types for the Tandem core library.

use crate::models::TaskStatus;
use thiserror::Error;

/// Result type alias for Tandem operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Tandem operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or out-of-domain input (negative weights, bad tokens, invalid fields).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested entity does not exist.
    #[error("Task not found: {0}")]
    EntityNotFound(String),

    /// The requested status change is not in the transition table.
    #[error("Cannot transition from {current} to {requested}")]
    IllegalTransition {
        /// Status the entity is currently in.
        current: TaskStatus,
        /// Status the caller asked for.
        requested: TaskStatus,
    },

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Invalid configuration file or override.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if this is a deterministic client-side rejection.
    ///
    /// Client errors are never worth retrying; IO failures may be.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_)
                | Error::EntityNotFound(_)
                | Error::IllegalTransition { .. }
                | Error::AmbiguousId(_, _)
        )
    }
}
