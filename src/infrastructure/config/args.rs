use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the `image-provider` binary.
#[derive(Debug, Parser)]
#[command(
    name = "image-provider",
    version,
    about = "Load images by URL through an in-memory cache",
    long_about = None
)]
pub struct CliArgs {
    /// Image URLs to load.
    #[arg(required = true, value_name = "URL")]
    pub urls: Vec<String>,

    /// Number of times to load the full URL list. Later passes hit the cache.
    #[arg(long, default_value_t = 1)]
    pub passes: u32,

    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// HTTP request timeout in seconds.
    #[arg(long, env = "IMAGE_PROVIDER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// User agent sent with every request.
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Report undecodable payloads as errors instead of dropping them.
    #[arg(long)]
    pub surface_decode_errors: bool,
}
