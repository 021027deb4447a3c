//! Infrastructure layer: file I/O
//!
//! Reading and atomically replacing the persisted documents. Nothing here
//! knows about the document format.

pub mod error;
pub mod storage;

pub use error::{StorageError, StorageResult};
