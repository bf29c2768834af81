//! Error types for tasklabel.

use thiserror::Error;

/// Result type alias using tasklabel's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tasklabel operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Value already present (e.g. duplicate category)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a validation conflict rather than an
    /// infrastructure failure.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
