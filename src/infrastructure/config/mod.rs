//! Application configuration.

/// Configuration file model.
pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Configuration file loading.
pub mod store;

pub use app_config::{AppConfig, FetcherConfig, LoaderSettings, LogLevel};
pub use args::CliArgs;
pub use store::{ConfigError, ConfigStore};
