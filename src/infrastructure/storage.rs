//! Document file storage
//!
//! Reads reassemble the file line by line with the platform line separator,
//! so multi-line text content loads the same way it was authored on this
//! platform. Replacement is atomic: the new contents are written to a
//! temporary file in the target directory and renamed over the destination,
//! so a crash mid-save leaves either the old or the new document on disk,
//! never a truncated one.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::infrastructure::error::{StorageError, StorageResult};

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// Read a document file, rejoining its lines with the platform line
/// separator (a trailing separator is appended after the last line).
pub fn read_document(path: &Path) -> StorageResult<String> {
    let file =
        File::open(path).map_err(|e| StorageError::io(format!("open {}", path.display()), e))?;
    let reader = BufReader::new(file);

    let mut text = String::new();
    for line in reader.lines() {
        let line = line.map_err(|e| StorageError::io(format!("read {}", path.display()), e))?;
        text.push_str(&line);
        text.push_str(LINE_SEPARATOR);
    }
    Ok(text)
}

/// Atomically replace the file at `path` with `contents`, creating parent
/// directories as needed.
pub fn replace_file(path: &Path, contents: &str) -> StorageResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .map_err(|e| StorageError::io(format!("create directory {}", dir.display()), e))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| StorageError::io(format!("create temp file in {}", dir.display()), e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| StorageError::io(format!("write {}", path.display()), e))?;
    tmp.flush()
        .map_err(|e| StorageError::io(format!("flush {}", path.display()), e))?;
    tmp.persist(path)
        .map_err(|e| StorageError::io(format!("replace {}", path.display()), e.error))?;

    debug!("replaced {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_file_without_trailing_newline_when_reading_then_appends_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.xml");
        fs::write(&path, "<root/>").unwrap();

        let text = read_document(&path).unwrap();
        assert_eq!(text, format!("<root/>{LINE_SEPARATOR}"));
    }

    #[test]
    fn given_missing_parent_directory_when_replacing_then_creates_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("doc.xml");

        replace_file(&path, "<root/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<root/>");
    }

    #[test]
    fn given_existing_file_when_replacing_then_new_contents_win() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.xml");
        fs::write(&path, "old").unwrap();

        replace_file(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
