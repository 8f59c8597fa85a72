//! Shared configuration types for ktane-hue
//!
//! This crate contains the serializable configuration shared between the
//! core library (ktane-hue-core) and the command line front end.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Number of log lines examined per read. Lines past this are ignored.
pub const DEFAULT_LINE_LIMIT: usize = 2000;

/// Duration of one animation frame.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

fn default_log_path() -> String {
    "logs/ktane.log".to_string()
}
fn default_bridge_address() -> String {
    "192.168.0.42".to_string()
}
fn default_color_lamps() -> Vec<String> {
    vec!["light1".to_string(), "light2".to_string()]
}
fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}
fn default_line_limit() -> usize {
    DEFAULT_LINE_LIMIT
}

// ─────────────────────────────────────────────────────────────────────────────
// Lamp Sink Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Which lamp backend drives the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// Philips Hue bridge on the local network
    #[default]
    Hue,
    /// In-memory lamps, nothing leaves the process (dry run)
    Memory,
}

impl SinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Memory => "memory",
        }
    }
}

impl std::str::FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hue" => Ok(Self::Hue),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown lamp sink '{other}' (expected 'hue' or 'memory')")),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bridge Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Connection settings for the Hue bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSettings {
    #[serde(default = "default_bridge_address")]
    pub address: String,
    /// Whitelisted API user. Empty until the bridge has been paired.
    #[serde(default)]
    pub username: String,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            address: default_bridge_address(),
            username: String::new(),
        }
    }
}

impl BridgeSettings {
    pub fn is_paired(&self) -> bool {
        !self.username.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// Note: Persistence methods (load/save) are provided by ktane-hue-core via the
/// `AppConfigExt` trait. Every field carries a serde default so partial files
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Game log to tail, relative to the working directory unless absolute.
    #[serde(default = "default_log_path")]
    pub log_path: String,
    /// Names of the lamps that receive the color animation.
    /// All other lamps are dimmed to a fixed ambient brightness.
    #[serde(default = "default_color_lamps")]
    pub color_lamps: Vec<String>,
    #[serde(default)]
    pub sink: SinkKind,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_line_limit")]
    pub line_limit: usize,
    /// Drop log records older (or newer) than this relative to the wall clock.
    /// Unset forwards every record on every read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_event_age_ms: Option<u64>,
    #[serde(default)]
    pub bridge: BridgeSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            color_lamps: default_color_lamps(),
            sink: SinkKind::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            line_limit: DEFAULT_LINE_LIMIT,
            max_event_age_ms: None,
            bridge: BridgeSettings::default(),
        }
    }
}

impl AppConfig {
    /// Create a config reading the given log file.
    /// Other fields use their default values.
    pub fn with_log_path(log_path: String) -> Self {
        Self {
            log_path,
            ..Self::default()
        }
    }

    pub fn is_color_lamp(&self, name: &str) -> bool {
        self.color_lamps.iter().any(|l| l == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_path, "logs/ktane.log");
        assert_eq!(config.bridge.address, "192.168.0.42");
        assert_eq!(config.color_lamps, vec!["light1", "light2"]);
        assert_eq!(config.line_limit, 2000);
        assert_eq!(config.tick_interval_ms, 100);
        assert!(config.max_event_age_ms.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            color_lamps = ["Desk", "Ceiling"]
            sink = "memory"
            max_event_age_ms = 300

            [bridge]
            username = "abc123"
            "#,
        )
        .unwrap();

        assert_eq!(config.sink, SinkKind::Memory);
        assert_eq!(config.max_event_age_ms, Some(300));
        assert!(config.bridge.is_paired());
        assert_eq!(config.bridge.address, "192.168.0.42");
        assert!(config.is_color_lamp("Desk"));
        assert!(!config.is_color_lamp("light1"));
    }

    #[test]
    fn sink_kind_from_str() {
        assert_eq!("HUE".parse::<SinkKind>(), Ok(SinkKind::Hue));
        assert_eq!("memory".parse::<SinkKind>(), Ok(SinkKind::Memory));
        assert!("zigbee".parse::<SinkKind>().is_err());
    }
}
