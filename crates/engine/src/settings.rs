//! User settings and their JSON store.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under the platform config dir that holds the settings file.
pub const CONFIG_DIR_NAME: &str = "clipspeak";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("invalid settings file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("failed to serialize settings: {0}")]
    Serialize(String),

    #[error("no platform configuration directory available")]
    NoConfigDir,
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e.to_string())
    }
}

/// Announcement settings. Read at run time, changed only between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Announce only the operation name, without the content word.
    pub terse_announcements: bool,

    /// Owned by the updater; stored here so it survives a save.
    pub check_for_updates_at_startup: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            terse_announcements: true,
            check_for_updates_at_startup: false,
        }
    }
}

/// JSON file holding [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/clipspeak/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    pub fn open_default() -> Result<Self, SettingsError> {
        Self::default_path()
            .map(Self::new)
            .ok_or(SettingsError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&contents).map_err(|e| SettingsError::Parse {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Serialize(e.to_string()))?;
        std::fs::write(&self.path, json)?;

        tracing::debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}
