//! Application configuration
//!
//! This module re-exports the shared types from ktane-hue-types and provides
//! persistence for AppConfig through confy (TOML).

use std::path::{Path, PathBuf};

use chrono::Duration;

use super::ConfigError;
use crate::game_log::ReaderOptions;

// Re-export all shared types
pub use ktane_hue_types::{AppConfig, BridgeSettings, SinkKind};

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "ktane-hue";
const CONFIG_NAME: &str = "config";

/// Extension trait for AppConfig persistence and validation
pub trait AppConfigExt: Sized {
    /// Load from an explicit file, writing defaults if missing.
    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save_to(&self, path: &Path) -> Result<(), ConfigError>;
    fn default_path() -> Result<PathBuf, ConfigError>;
    fn validate(&self) -> Result<(), ConfigError>;
    fn reader_options(&self) -> ReaderOptions;
}

impl AppConfigExt for AppConfig {
    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = confy::load_path(path)?;
        config.validate()?;
        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(|source| ConfigError::Save {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    fn default_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Locate)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.log_path.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.line_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "line_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.color_lamps.is_empty() {
            tracing::warn!("no color lamps configured, only ambient brightness will be set");
        }
        Ok(())
    }

    fn reader_options(&self) -> ReaderOptions {
        ReaderOptions {
            line_limit: self.line_limit,
            max_event_age: self
                .max_event_age_ms
                .and_then(|ms| i64::try_from(ms).ok())
                .map(Duration::milliseconds),
        }
    }
}
