//! Configuration and settings management for StoneKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (undo depth, clipboard behaviour, text defaults)
//! - Persistence settings (document directory, asset verification timeout)

use crate::error::{ConfigError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Design editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum number of undo steps kept; unlimited when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_depth: Option<usize>,
    /// Offset applied to pasted elements
    pub paste_offset: [f64; 3],
    /// Font used for new text elements
    pub default_font: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_depth: None,
            paste_offset: [0.2, 0.2, 0.0],
            default_font: "helvetiker".to_string(),
        }
    }
}

/// Design persistence settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceSettings {
    /// How long a single image existence check may take before the image
    /// is treated as unreachable
    pub asset_timeout_ms: u64,
    /// Directory holding saved design documents
    pub document_dir: PathBuf,
}

impl PersistenceSettings {
    pub fn asset_timeout(&self) -> Duration {
        Duration::from_millis(self.asset_timeout_ms)
    }
}

impl Default for PersistenceSettings {
    fn default() -> Self {
        Self {
            asset_timeout_ms: 5000,
            document_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stonekit")
                .join("designs"),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub persistence: PersistenceSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location: `<config_dir>/stonekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("stonekit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does
    /// not exist yet
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.editor.history_depth == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "editor.history_depth".to_string(),
                value: "0".to_string(),
            });
        }

        if self.editor.paste_offset.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::ValueOutOfRange {
                key: "editor.paste_offset".to_string(),
                value: format!("{:?}", self.editor.paste_offset),
            });
        }

        if self.persistence.asset_timeout_ms == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "persistence.asset_timeout_ms".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.editor.history_depth, None);
        assert_eq!(config.persistence.asset_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.editor.history_depth = Some(20);
        config.persistence.asset_timeout_ms = 750;
        config.save_to_file(&path).expect("save");

        let loaded = Config::load_from_file(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_partial_file_uses_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "editor": { "history_depth": 10 } }"#).expect("write");

        let loaded = Config::load_from_file(&path).expect("load");
        assert_eq!(loaded.editor.history_depth, Some(10));
        assert_eq!(loaded.editor.paste_offset, [0.2, 0.2, 0.0]);
        assert_eq!(loaded.persistence.asset_timeout_ms, 5000);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.editor.history_depth = Some(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));

        let mut config = Config::default();
        config.persistence.asset_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.yaml");
        let err = Config::default().save_to_file(&path).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempdir().expect("tempdir");
        let config = Config::load_or_default(&dir.path().join("absent.toml")).expect("default");
        assert_eq!(config, Config::default());
    }
}
