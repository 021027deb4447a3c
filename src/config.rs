//! Persisted-file locations
//!
//! Resolution precedence (highest first):
//! 1. Explicit path from the caller (CLI flag)
//! 2. Environment variables: `CHIMECFG_SETTINGS_FILE` / `CHIMECFG_RECENT_FILE`
//! 3. Platform config directory (e.g. `~/.config/chimecfg/`)
//!
//! `~`, `$VAR`, and `${VAR}` are expanded in user-supplied paths.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Settings document filename.
pub const SETTINGS_FILE: &str = "configuration.xml";
/// Recent-file history document filename.
pub const RECENT_FILE: &str = "mru.xml";

/// Environment override for the settings document path.
pub const SETTINGS_ENV: &str = "CHIMECFG_SETTINGS_FILE";
/// Environment override for the history document path.
pub const RECENT_ENV: &str = "CHIMECFG_RECENT_FILE";

/// Resolved locations of the two persisted documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub settings_file: PathBuf,
    pub recent_file: PathBuf,
}

impl Locations {
    /// Resolve document locations from caller overrides, the environment,
    /// and the platform config directory, in that order.
    pub fn resolve(settings_override: Option<&Path>, recent_override: Option<&Path>) -> Self {
        let base = config_dir();
        Self {
            settings_file: resolve_one(settings_override, SETTINGS_ENV, &base, SETTINGS_FILE),
            recent_file: resolve_one(recent_override, RECENT_ENV, &base, RECENT_FILE),
        }
    }
}

/// Platform config directory, falling back to the working directory when
/// the platform provides none.
fn config_dir() -> PathBuf {
    ProjectDirs::from("", "", "chimecfg")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn resolve_one(
    override_path: Option<&Path>,
    env_var: &str,
    base: &Path,
    filename: &str,
) -> PathBuf {
    if let Some(path) = override_path {
        return expand(&path.to_string_lossy());
    }
    if let Ok(value) = std::env::var(env_var) {
        if !value.is_empty() {
            return expand(&value);
        }
    }
    base.join(filename)
}

/// Expand shell variables and tilde in a user-supplied path.
///
/// Handles `~`, `$VAR`, and `${VAR}` syntax; an unexpandable path is kept
/// verbatim.
fn expand(path: &str) -> PathBuf {
    PathBuf::from(
        shellexpand::full(path)
            .map(|expanded| expanded.into_owned())
            .unwrap_or_else(|_| path.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_explicit_override_when_resolving_then_it_wins() {
        let locations = Locations::resolve(Some(Path::new("/tmp/custom.xml")), None);
        assert_eq!(locations.settings_file, PathBuf::from("/tmp/custom.xml"));
    }

    #[test]
    fn given_no_override_when_resolving_then_uses_platform_filenames() {
        let locations = Locations::resolve(None, None);
        assert!(locations
            .settings_file
            .to_string_lossy()
            .ends_with(SETTINGS_FILE));
        assert!(locations.recent_file.to_string_lossy().ends_with(RECENT_FILE));
    }

    #[test]
    fn given_tilde_in_override_when_resolving_then_expands_to_home() {
        let home = std::env::var("HOME").expect("HOME should be set");
        let locations = Locations::resolve(Some(Path::new("~/settings.xml")), None);
        assert!(
            locations.settings_file.starts_with(&home),
            "expected expansion under {home}, got {}",
            locations.settings_file.display()
        );
    }
}
