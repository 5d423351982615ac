use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use image_provider::ImageProvider;
use image_provider::domain::{FetchError, ImageKey, Location};
use image_provider::infrastructure::{AppConfig, CliArgs, ConfigStore};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let store = ConfigStore::new().unwrap_or_else(|_| ConfigStore::with_dir(PathBuf::from(".")));
    let mut config = store.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = image_provider::VERSION, "Starting image provider");

    let locations = args
        .urls
        .iter()
        .map(|url| Location::parse(url))
        .collect::<Result<Vec<_>, _>>()?;

    let provider = ImageProvider::from_config(&config)?;

    for pass in 1..=args.passes {
        for location in &locations {
            let source = if provider.cache().get_image(&ImageKey::from(location)).is_some() {
                "cache"
            } else {
                "network"
            };

            match provider.resolve(location).await {
                Some(Ok(image)) => println!(
                    "[pass {pass}] {location}: {}x{} ({source})",
                    image.width(),
                    image.height()
                ),
                Some(Err(e)) => {
                    let hint = if e.as_fetch().is_some_and(FetchError::is_transient) {
                        " (may succeed on retry)"
                    } else {
                        ""
                    };
                    println!("[pass {pass}] {location}: error: {e}{hint}");
                }
                None => {
                    warn!(url = %location, "No result delivered");
                    println!("[pass {pass}] {location}: not an image");
                }
            }
        }
    }

    Ok(())
}
