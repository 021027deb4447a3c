//! Alarm settings store
//!
//! Maps the fixed settings fields to and from the persisted document.
//! Fields are written in declaration order, so equal state always produces
//! byte-identical documents regardless of any in-memory iteration order.

use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::application::error::ApplicationResult;
use crate::domain::{parse, DocumentResult, DocumentWriter, Entity};
use crate::infrastructure::storage;

/// Root entity name shared by all persisted documents.
pub const ROOT_ENTITY: &str = "root";

/// Alarm settings.
///
/// Each field has a default used whenever the persisted value is missing or
/// fails to coerce; a missing or unreadable document therefore always loads
/// into a usable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmSettings {
    /// Hour the alarm fires (0-23)
    pub alarm_hour: u32,
    /// Minute the alarm fires (0-59)
    pub alarm_minute: u32,
    /// Second the alarm fires (0-59)
    pub alarm_second: u32,
    /// Index into the platform timezone-ID list
    pub alarm_time_zone: usize,
    /// Path of the audio file to play
    pub alarm_filename: String,
    /// Whether quitting the application asks for confirmation
    pub confirm_exit: bool,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            alarm_hour: 0,
            alarm_minute: 0,
            alarm_second: 0,
            alarm_time_zone: 0,
            alarm_filename: String::new(),
            confirm_exit: true,
        }
    }
}

impl AlarmSettings {
    /// Load settings from `path`.
    ///
    /// I/O failures are surfaced. A document that fails to parse loads as
    /// all defaults; individual fields that are absent or unparsable fall
    /// back to their defaults silently.
    pub fn load(path: &Path) -> ApplicationResult<Self> {
        let text = storage::read_document(path)?;
        match parse(&text) {
            Some(root) => Ok(Self::from_document(&root)),
            None => {
                debug!(
                    "settings document did not parse, using defaults: {}",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }

    /// Load settings, falling back to defaults when the file cannot be
    /// read. This is the application-startup path: a fresh install has no
    /// settings document yet.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            debug!("settings not loaded ({e}), using defaults");
            Self::default()
        })
    }

    /// Save settings to `path`, atomically replacing the previous document.
    pub fn save(&self, path: &Path) -> ApplicationResult<()> {
        let document = self.to_document()?;
        storage::replace_file(path, &document)?;
        Ok(())
    }

    /// Extract settings from a parsed tree, coercing each field.
    pub fn from_document(root: &Entity) -> Self {
        let defaults = Self::default();
        let filename = root.find_text("alarmFilename");
        Self {
            alarm_hour: scalar_field(root, "alarmHour", defaults.alarm_hour),
            alarm_minute: scalar_field(root, "alarmMinute", defaults.alarm_minute),
            alarm_second: scalar_field(root, "alarmSecond", defaults.alarm_second),
            alarm_time_zone: scalar_field(root, "alarmTimeZone", defaults.alarm_time_zone),
            alarm_filename: if filename.is_empty() {
                defaults.alarm_filename
            } else {
                filename
            },
            confirm_exit: bool_field(root, "confirmExit", defaults.confirm_exit),
        }
    }

    /// Serialize to a document string, one child entity per field in
    /// declaration order.
    pub fn to_document(&self) -> DocumentResult<String> {
        let fields: [(&str, String); 6] = [
            ("alarmHour", self.alarm_hour.to_string()),
            ("alarmMinute", self.alarm_minute.to_string()),
            ("alarmSecond", self.alarm_second.to_string()),
            ("alarmTimeZone", self.alarm_time_zone.to_string()),
            ("alarmFilename", self.alarm_filename.clone()),
            ("confirmExit", self.confirm_exit.to_string()),
        ];

        let mut writer = DocumentWriter::new();
        writer.open_entity(ROOT_ENTITY);
        for (name, value) in &fields {
            writer.open_entity(name).write_text(value);
            writer.close_entity()?;
        }
        writer.close_entity()?;
        writer.finish()
    }
}

/// Trim and parse a scalar field, substituting the default on a missing or
/// unparsable value.
fn scalar_field<T: FromStr>(root: &Entity, name: &str, default: T) -> T {
    let raw = root.find_text(name);
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            if !raw.is_empty() {
                debug!("field {name} did not coerce from {raw:?}, using default");
            }
            default
        }
    }
}

/// Case-insensitive "true"/"false"; anything else is the default.
fn bool_field(root: &Entity, name: &str, default: bool) -> bool {
    match root.find_text(name).trim().to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => default,
    }
}
