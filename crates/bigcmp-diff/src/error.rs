//! Error types for the diff crate.

use bigcmp_index::IndexError;

/// Errors that can occur while comparing or reporting.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A line table could not be built or paired with its buffer.
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
