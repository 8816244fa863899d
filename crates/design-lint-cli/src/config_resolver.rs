//! Configuration file lookup.
//!
//! The first match wins:
//!
//! 1. `--config PATH`
//! 2. `design-lint.toml` or `.design-lint.toml` in the document's directory
//!    or the nearest ancestor directory that has one
//! 3. `~/.design-lint/config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to the document or in one of its parent directories.
    Project(PathBuf),
    /// Loaded from the user's global config directory.
    Global(PathBuf),
    /// No config file; defaults apply.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config comes from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

const PROJECT_CONFIG_NAMES: &[&str] = &["design-lint.toml", ".design-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration for a document.
#[must_use]
pub fn resolve(document: &Path, explicit: Option<&Path>) -> ConfigSource {
    let start = document
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    resolve_from(start, explicit, global_config_dir())
}

fn resolve_from(
    start: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = find_project_config(start) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    let global = global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file());
    if let Some(found) = global {
        tracing::debug!("Found global config: {}", found.display());
        return ConfigSource::Global(found);
    }

    ConfigSource::Default
}

fn find_project_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the global config directory.
///
/// `$DESIGN_LINT_CONFIG_DIR` if set, otherwise `~/.design-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("DESIGN_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".design-lint"))
}
