//! StoneKit Settings Crate
//!
//! Handles editor configuration and its persistence as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings, PersistenceSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
