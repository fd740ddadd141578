//! Spa booking service
//!
//! Reads configuration from `$SPA_CONFIG` or
//! `~/.config/spa-booking/config.toml`.

use tracing::{info, warn};

use spa_booking::config::AppConfig;
use spa_booking::default_config_path;
use spa_booking::server::{init_tracing, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var("SPA_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());

    let (config, missing_file) = if config_path.exists() {
        (AppConfig::load(&config_path)?, None)
    } else {
        (AppConfig::default(), Some(config_path.clone()))
    };

    init_tracing(&config);
    match missing_file {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(path) => warn!("No config file at {}, using defaults", path.display()),
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: true,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
