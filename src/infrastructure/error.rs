//! Infrastructure-level errors

use thiserror::Error;

/// I/O failures at the storage boundary.
///
/// Surfaced to callers on save; load paths absorb them into defaults at the
/// application layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
