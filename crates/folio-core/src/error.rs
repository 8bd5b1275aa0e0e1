//! Error types for the folio document store.

use thiserror::Error;

use crate::validate::ValidationReport;

/// Result type alias using folio's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for document store operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Candidate document failed schema checks; nothing was applied.
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    /// Stale-base mutation attempt; caller must re-read and retry.
    #[error("Version conflict: mutation built against version {base}, store is at {current}")]
    Conflict { base: u64, current: u64 },

    /// Write to storage failed; in-memory state is unchanged.
    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    /// Persisted bytes were unreadable or malformed at startup.
    /// Recovered by falling back to the default skeleton, so callers
    /// normally only see this in logs.
    #[error("Load error: {0}")]
    Load(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Mutation targeted a surrogate id that no longer exists
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
