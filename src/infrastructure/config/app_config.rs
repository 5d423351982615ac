//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::ImageLoaderConfig;
use crate::domain::entities::DecodeFailurePolicy;

const APP_NAME: &str = "image-provider";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "imageprovider";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("image-provider/", env!("CARGO_PKG_VERSION"));

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// HTTP fetcher settings.
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Loader settings.
    #[serde(default)]
    pub loader: LoaderSettings,
}

/// HTTP fetcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Loader configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoaderSettings {
    /// Whether undecodable payloads are dropped or reported.
    #[serde(default)]
    pub decode_failure_policy: DecodeFailurePolicy,
}

impl From<LoaderSettings> for ImageLoaderConfig {
    fn from(settings: LoaderSettings) -> Self {
        Self {
            decode_failure_policy: settings.decode_failure_policy,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.fetcher.timeout_secs = timeout_secs;
        }
        if let Some(user_agent) = &args.user_agent {
            self.fetcher.user_agent.clone_from(user_agent);
        }
        if args.surface_decode_errors {
            self.loader.decode_failure_policy = DecodeFailurePolicy::Surface;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            fetcher: FetcherConfig::default(),
            loader: LoaderSettings::default(),
        }
    }
}
