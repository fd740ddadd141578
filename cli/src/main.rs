//! Spa booking service - CLI server
//!
//! ```sh
//! # Run with default config (~/.config/spa-booking/config.toml)
//! spa-booking-cli
//!
//! # Custom config path and port
//! spa-booking-cli --config /etc/spa-booking/config.toml --port 8081
//!
//! # Validate config without starting
//! spa-booking-cli --check
//!
//! # Print a bcrypt hash for a new account's password column
//! spa-booking-cli hash-password 'hunter2'
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use spa_booking::config::AppConfig;
use spa_booking::infrastructure::crypto::password::hash_password;
use spa_booking::server::{init_tracing, ServerHandle, ServerOptions};
use spa_booking::shared::errors::InfraError;

/// Spa booking service: appointments and employee/customer profiles.
#[derive(Parser, Debug)]
#[command(
    name = "spa-booking-cli",
    version,
    about = "Spa booking HTTP API server",
    long_about = "Spa booking service: cookie-session sign-in, appointments \
                  and employee/customer profiles over a JSON API.\n\n\
                  Default config: ~/.config/spa-booking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "SPA_CONFIG")]
    config: Option<PathBuf>,

    /// Override the HTTP listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the bcrypt hash of a password and exit.
    HashPassword { password: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::HashPassword { password }) = cli.command {
        let hashed = hash_password(&password).map_err(InfraError::from)?;
        println!("{}", hashed);
        return Ok(());
    }

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(spa_booking::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) if cli.check => {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        println!("   Migrations  : {}", config.database.run_migrations);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
