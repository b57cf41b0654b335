//! TOML-based user configuration.
//!
//! Stores timer durations and notification preferences. Configuration is
//! stored at `~/.config/studyroom/config.toml`; the `[timer]` table is
//! handed to the engine at construction. The engine itself never reads
//! files or environment variables - this module is the external collaborator
//! that supplies its settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::timer::TimerSettings;

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_volume")]
    pub volume: u32,
    /// Path to a custom completion sound file (optional). Playback is the
    /// surrounding layer's concern.
    #[serde(default)]
    pub custom_sound: Option<String>,
}

fn default_true() -> bool {
    true
}
fn default_volume() -> u32 {
    50
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 50,
            custom_sound: None,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyroom/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerSettings,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    /// Path of the user configuration file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("studyroom").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the user configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.timer.validate().map_err(|e| ConfigError::InvalidValue {
            key: "timer".into(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    /// Render as a TOML document.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Write to the user configuration path, creating parent directories.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(path, self.to_toml()?).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.timer, TimerSettings::default());
        assert!(config.notifications.enabled);
        assert_eq!(config.notifications.volume, 50);
    }

    #[test]
    fn partial_timer_table_keeps_other_defaults() {
        let config = Config::from_toml("[timer]\nfocus_minutes = 50\n").unwrap();
        assert_eq!(config.timer.focus_minutes, 50);
        assert_eq!(config.timer.short_break_minutes, 5);
    }

    #[test]
    fn zero_duration_refused_at_load() {
        let err = Config::from_toml("[timer]\nfocus_minutes = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::from_toml("[timer\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.timer.focus_minutes = 45;
        config.notifications.enabled = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.timer.focus_minutes, 45);
        assert!(!loaded.notifications.enabled);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.timer, TimerSettings::default());
    }
}
