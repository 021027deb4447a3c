//! Application-level errors (wraps domain and storage errors)

use thiserror::Error;

use crate::domain::DocumentError;
use crate::infrastructure::StorageError;

/// What the stores surface to their callers.
///
/// Parse failures never appear here: a document that does not parse loads
/// as defaults. Storage errors on save are surfaced for user-visible
/// reporting; document errors indicate writer misuse and abort the save
/// with nothing written.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Storage(#[from] StorageError),
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
