//! Badge Preview CLI
//!
//! Command-line interface for the status badge preview service.

use std::path::PathBuf;

use badge_preview::{load_config, Config, PreviewBuilder};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "badge-preview")]
#[command(about = "HTTP preview service for status badges")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, log_level={:?}",
        args.config,
        args.port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting badge preview service");
    tracing::debug!("Preview samples: {:?}", config.preview.samples);

    PreviewBuilder::new(config).build().await?.start().await?;

    Ok(())
}
