//! Infrastructure layer with adapters for external collaborators.

/// Application configuration.
pub mod config;
/// Image decoding.
pub mod image;
/// HTTP transport.
pub mod http;
/// Image storage backends.
pub mod storage;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigStore, FetcherConfig, LogLevel};
pub use http::HttpFetcher;
pub use image::ImageCrateDecoder;
pub use storage::HashImageStorage;
