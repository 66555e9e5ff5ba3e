// Rust guideline compliant 2026-02-09

//! Error handling for Tandem application services.

use serde::Serialize;
use tandem_core::Error as CoreError;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for service responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested task was not found.
    NotFound,
    /// The provided identifier matched multiple tasks.
    AmbiguousId,
    /// The requested status change is not allowed.
    IllegalTransition,
    /// Task fields failed validation.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// Configuration could not be loaded.
    ConfigError,
    /// IO failure.
    IoError,
}

impl ErrorCode {
    /// Returns the HTTP status a CRUD front end should answer with.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            ErrorCode::IllegalTransition => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::AmbiguousId => 409,
            ErrorCode::ValidationError | ErrorCode::InvalidInput => 422,
            ErrorCode::ConfigError | ErrorCode::IoError => 500,
        }
    }
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Core(core) => match core {
                CoreError::EntityNotFound(_) => ErrorCode::NotFound,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::IllegalTransition { .. } => ErrorCode::IllegalTransition,
                CoreError::InvalidInput(_) => ErrorCode::ValidationError,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
            },
        }
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code().http_status()
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::AmbiguousId(partial, matches)) => Some(serde_json::json!({
                "partial": partial,
                "matches": matches,
            })),
            AppError::Core(CoreError::IllegalTransition { current, requested }) => {
                Some(serde_json::json!({
                    "current": current,
                    "requested": requested,
                    "allowed": current.successors(),
                }))
            }
            _ => None,
        }
    }
}
