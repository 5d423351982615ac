use super::app_config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while locating or reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Reading the config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads `config.toml` from a config directory.
pub struct ConfigStore {
    config_dir: PathBuf,
}

impl ConfigStore {
    /// Create a new `ConfigStore` rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = AppConfig::default_config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `ConfigStore` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Loads the application configuration.
    ///
    /// A missing file yields the defaults; a malformed one is reported and
    /// replaced by the defaults. Nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an existing file cannot be read.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            std::path::Path::to_path_buf,
        );

        if !config_path.exists() {
            debug!(
                "Config file not found at {:?}, using defaults.",
                config_path
            );
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse config file: {}. Using defaults.", e);
                AppConfig::default()
            }
        };
        config.config = Some(config_path);
        Ok(config)
    }
}
