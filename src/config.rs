//! Configuration management
//!
//! Process configuration for the storage subsystem. The transport host
//! loads this once at startup and hands it to the dispatcher; nothing
//! here is a process-wide global.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Storage subsystem configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Directory holding one subdirectory per user.
    pub storage_root: String,

    /// Advertised storage limit in GB. Shown in the usage panel, never
    /// enforced at write time.
    pub quota_gb: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            storage_root: "user_files".to_string(),
            quota_gb: 10,
        }
    }
}

impl BotConfig {
    /// Load configuration from config.toml (optional) with environment
    /// overrides (FILE_BOT_STORAGE_ROOT, FILE_BOT_QUOTA_GB).
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = BotConfig::default();

        let settings = Config::builder()
            .set_default("storage_root", defaults.storage_root)?
            .set_default("quota_gb", defaults.quota_gb)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("FILE_BOT"))
            .build()?;

        let config: BotConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_root.is_empty() {
            return Err(ConfigError::Message("storage_root cannot be empty".into()));
        }
        if self.quota_gb == 0 {
            return Err(ConfigError::Message(
                "quota_gb must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Get the storage root as PathBuf.
    pub fn storage_root_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_root)
    }

    /// Advertised quota in bytes.
    pub fn quota_bytes(&self) -> u64 {
        self.quota_gb * 1024 * 1024 * 1024
    }
}
