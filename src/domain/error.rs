//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Structural misuse of the document writer.
///
/// These represent errors in the calling sequence, not recoverable runtime
/// conditions: callers should abandon the document being assembled instead
/// of retrying, and nothing partial is ever flushed to storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("close_entity called with no entity open")]
    UnbalancedClose,

    #[error("document finished with unclosed entity: {0}")]
    UnclosedEntity(String),
}

pub type DocumentResult<T> = Result<T, DocumentError>;
