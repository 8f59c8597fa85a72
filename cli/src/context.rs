use ktane_hue_core::context::{AppConfig, AppConfigExt, ConfigError, SinkKind};
use std::path::{Path, PathBuf};

/// Configuration resolved for this run, plus where it came from so that
/// pairing results can be written back.
///
/// `config` is what the run uses, command line overrides included. Saving
/// writes the file contents as loaded, plus any pairing result.
pub struct CliContext {
    pub config: AppConfig,
    stored: AppConfig,
    config_path: PathBuf,
}

impl CliContext {
    /// Load from `path`, or from the platform config directory when `None`.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(path) => path,
            None => AppConfig::default_path()?,
        };
        let config = AppConfig::load_from(&config_path)?;
        tracing::info!(path = %config_path.display(), "configuration loaded");
        Ok(Self::from_parts(config, config_path))
    }

    pub fn from_parts(config: AppConfig, config_path: PathBuf) -> Self {
        Self {
            stored: config.clone(),
            config,
            config_path,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Command line values win over the file. Overrides are not persisted.
    pub fn apply_overrides(
        &mut self,
        sink: Option<SinkKind>,
        log: Option<PathBuf>,
    ) -> Result<(), ConfigError> {
        if let Some(sink) = sink {
            self.config.sink = sink;
        }
        if let Some(log) = log {
            self.config.log_path = log.display().to_string();
        }
        self.config.validate()
    }

    /// Record the username obtained by pairing, for this run and on disk.
    pub fn set_bridge_username(&mut self, username: String) {
        self.stored.bridge.username = username.clone();
        self.config.bridge.username = username;
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.stored.save_to(&self.config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let mut ctx = CliContext::from_parts(AppConfig::default(), PathBuf::from("config.toml"));
        ctx.apply_overrides(Some(SinkKind::Memory), Some(PathBuf::from("/tmp/ktane.log")))
            .unwrap();

        assert_eq!(ctx.config.sink, SinkKind::Memory);
        assert_eq!(ctx.config.log_path, "/tmp/ktane.log");
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut ctx = CliContext::from_parts(AppConfig::default(), PathBuf::from("config.toml"));
        ctx.apply_overrides(None, None).unwrap();
        assert_eq!(ctx.config, AppConfig::default());
    }

    #[test]
    fn test_load_and_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ktane_hue.toml");

        let mut ctx = CliContext::load(Some(path.clone())).unwrap();
        ctx.set_bridge_username("paired-user".to_string());
        ctx.save().unwrap();

        let reloaded = CliContext::load(Some(path)).unwrap();
        assert!(reloaded.config.bridge.is_paired());
    }

    #[test]
    fn test_save_after_pairing_keeps_overrides_out_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ktane_hue.toml");

        let mut ctx = CliContext::load(Some(path.clone())).unwrap();
        ctx.apply_overrides(Some(SinkKind::Memory), Some(PathBuf::from("/tmp/override.log")))
            .unwrap();
        ctx.set_bridge_username("paired-user".to_string());
        ctx.save().unwrap();

        assert_eq!(ctx.config.log_path, "/tmp/override.log");
        assert_eq!(ctx.config.bridge.username, "paired-user");

        let reloaded = CliContext::load(Some(path)).unwrap();
        assert_eq!(reloaded.config.log_path, "logs/ktane.log");
        assert_eq!(reloaded.config.sink, SinkKind::Hue);
        assert_eq!(reloaded.config.bridge.username, "paired-user");
    }

    #[test]
    fn test_overridden_log_path_is_validated() {
        let mut ctx = CliContext::from_parts(AppConfig::default(), PathBuf::from("config.toml"));
        let err = ctx.apply_overrides(None, Some(PathBuf::from(""))).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "log_path", .. }));
    }
}
