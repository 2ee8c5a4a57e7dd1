//! Shared error types for the application

use thiserror::Error;

/// Main error type for robmatrix operations
#[derive(Debug, Error)]
pub enum Error {
    /// A decision input violated the constrained numeric domain
    #[error("invalid input `{field}`: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-input error for a named field.
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
