//! Recent-file history
//!
//! A capacity-bounded list of strings ordered by first insertion. Storing a
//! value that is already present changes nothing: recency here means "when
//! first added", not "when last used", and that semantic is part of the
//! persisted format's contract.

use std::path::Path;

use tracing::debug;

use crate::application::error::ApplicationResult;
use crate::application::settings::ROOT_ENTITY;
use crate::domain::{parse, DocumentResult, DocumentWriter, Entity};
use crate::infrastructure::storage;

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 10;

/// Entity holding the entry count in the persisted document.
const COUNT_ENTITY: &str = "numberOfValues";
/// Accepted alias for the entry count.
const COUNT_ALIAS: &str = "count";

/// Bounded most-recently-used list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentList {
    /// Entries, oldest first
    values: Vec<String>,
    /// Maximum number of entries kept
    capacity: usize,
}

impl Default for RecentList {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RecentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All entries, oldest first.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Record a value.
    ///
    /// A value already present (exact string equality) is left untouched,
    /// keeping its position and the list's size. At capacity the oldest
    /// entry is evicted to make room.
    pub fn store(&mut self, value: &str) {
        if self.values.iter().any(|v| v == value) {
            return;
        }
        if self.values.len() >= self.capacity {
            self.values.remove(0);
        }
        self.values.push(value.to_string());
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Load a list from `path` with the given capacity.
    ///
    /// I/O failures are surfaced. A document that fails to parse, a bad
    /// count, or missing value entries degrade to whatever could be read.
    pub fn load(path: &Path, capacity: usize) -> ApplicationResult<Self> {
        let text = storage::read_document(path)?;
        match parse(&text) {
            Some(root) => Ok(Self::from_document(&root, capacity)),
            None => {
                debug!(
                    "history document did not parse, starting empty: {}",
                    path.display()
                );
                Ok(Self::with_capacity(capacity))
            }
        }
    }

    /// Load, falling back to an empty list when the file cannot be read.
    pub fn load_or_default(path: &Path, capacity: usize) -> Self {
        Self::load(path, capacity).unwrap_or_else(|e| {
            debug!("history not loaded ({e}), starting empty");
            Self::with_capacity(capacity)
        })
    }

    /// Save the list to `path`, atomically replacing the previous document.
    pub fn save(&self, path: &Path) -> ApplicationResult<()> {
        let document = self.to_document()?;
        storage::replace_file(path, &document)?;
        Ok(())
    }

    /// Extract a list from a parsed tree.
    ///
    /// The persisted count is clamped to `capacity`; extraction stops at
    /// the first missing `value{i}` entity, keeping what was read so far.
    pub fn from_document(root: &Entity, capacity: usize) -> Self {
        let mut list = Self::with_capacity(capacity);

        let mut raw_count = root.find_text(COUNT_ENTITY);
        if raw_count.is_empty() {
            raw_count = root.find_text(COUNT_ALIAS);
        }
        let count: usize = match raw_count.trim().parse() {
            Ok(count) => count,
            Err(_) => return list,
        };

        for i in 0..count.min(capacity) {
            match root.find(&format!("value{i}")) {
                Some(entry) => list.values.push(entry.text_content()),
                None => break,
            }
        }
        list
    }

    /// Serialize to a document string: the count entity, then one entity
    /// per value in order.
    pub fn to_document(&self) -> DocumentResult<String> {
        let mut writer = DocumentWriter::new();
        writer.open_entity(ROOT_ENTITY);
        writer
            .open_entity(COUNT_ENTITY)
            .write_text(&self.values.len().to_string());
        writer.close_entity()?;
        for (i, value) in self.values.iter().enumerate() {
            writer.open_entity(&format!("value{i}")).write_text(value);
            writer.close_entity()?;
        }
        writer.close_entity()?;
        writer.finish()
    }
}
