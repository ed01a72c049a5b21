//! Settings file: drag tuning plus the fields the terminal host shows.
//!
//! Stored as JSON under the user cache directory. A default file is written on first run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::{FieldOptions, OptionsError};

const APP_DIR: &str = ".dragnum";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

/// Overrides the settings file location.
pub const SETTINGS_PATH_ENV: &str = "DRAGNUM_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid drag options: {0}")]
    InvalidOption(#[from] OptionsError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub drag: FieldOptions,
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSettings {
    pub name: String,
    /// Initial input text, parsed the same way as edited text.
    pub value: String,
}

impl FieldSettings {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

fn default_fields() -> Vec<FieldSettings> {
    vec![
        FieldSettings::new("width", "320"),
        FieldSettings::new("height", "240"),
        FieldSettings::new("opacity", "0.5"),
        FieldSettings::new("rotation", "-45"),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drag: FieldOptions::default(),
            fields: default_fields(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.drag.validate()?;
        Ok(())
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    get_cache_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Writes default settings to `path` unless a file already exists there.
pub fn ensure_settings_file(path: &Path) -> Result<(), SettingsError> {
    if path.exists() {
        return Ok(());
    }
    let io_err = |source: std::io::Error| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let content = serde_json::to_string_pretty(&Settings::default()).map_err(|source| {
        SettingsError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    std::fs::write(path, content).map_err(io_err)?;
    tracing::info!(path = %path.display(), "wrote default settings");
    Ok(())
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = serde_json::from_str(&data).map_err(|source| SettingsError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Loads the user's settings, creating the default file first if needed.
///
/// Falls back to defaults when no settings location can be determined.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let Some(path) = get_settings_path() else {
        tracing::warn!("cannot determine settings directory; using defaults");
        return Ok(Settings::default());
    };
    ensure_settings_file(&path)?;
    load_settings_from(&path)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
