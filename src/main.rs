//! phishdrill - mock credential-capture landing page for security-awareness
//! training.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │                  PHISHDRILL                  │
//!                 │                                              │
//!   GET /login    │  ┌────────┐                                  │
//!   ──────────────┼─▶│  http  │──── render form ────────────────▶│
//!                 │  │ server │                                  │
//!   POST /login   │  └───┬────┘                                  │
//!   ──────────────┼──────┤                                       │
//!                 │      ▼                                       │
//!                 │  ┌──────────┐   ┌────────────┐   ┌─────────┐ │
//!                 │  │ identity │──▶│ rate limit │──▶│validate │ │
//!                 │  └──────────┘   └────────────┘   └────┬────┘ │
//!                 │                                       │      │
//!                 │                                       ▼      │
//!                 │                              ┌──────────────┐│
//!                 │                              │capture store ││──▶ capture.log
//!                 │                              └──────────────┘│
//!                 └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use phishdrill::capture::{CaptureStore, PermissionStatus};
use phishdrill::config::validation::validate_config;
use phishdrill::config::{load_config, ConfigError};
use phishdrill::intake::{Intake, IdentityResolver, SlidingWindowLimiter};
use phishdrill::lifecycle::{shutdown_on_signal, Shutdown};
use phishdrill::observability::{logging, metrics};
use phishdrill::{AppConfig, HttpServer};

#[derive(Parser, Debug)]
#[command(name = "phishdrill")]
#[command(about = "Mock credential-capture landing page for security-awareness training")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g., "127.0.0.1:5000").
    #[arg(long)]
    bind: Option<String>,

    /// Override the capture log path.
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(log_file) = args.log_file {
        config.capture.log_path = log_file;
    }
    // CLI overrides bypass the loader, so re-check them.
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.observability.log_filter);

    tracing::info!("phishdrill v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::warn!("Training tool only - never enter real credentials");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        capture_log = %config.capture.log_path,
        rate_limit_max = config.rate_limit.max_requests,
        rate_limit_window_secs = config.rate_limit.window_seconds,
        "Configuration loaded"
    );

    // Create the capture log (with its sentinel line) before accepting
    // traffic, and tighten permissions up front.
    let store = Arc::new(CaptureStore::open(&config.capture.log_path)?);
    if let PermissionStatus::Failed(e) = store.restrict_permissions() {
        tracing::warn!(
            error = %e,
            path = %store.path().display(),
            "Failed to tighten capture log permissions"
        );
        metrics::record_capture_warning("permissions");
    }

    let intake = Arc::new(Intake::new(
        IdentityResolver::new(&config.identity),
        SlidingWindowLimiter::new(
            config.rate_limit.max_requests,
            Duration::from_secs(config.rate_limit.window_seconds),
        ),
        store,
    ));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_signal(shutdown.clone()));

    let server = HttpServer::new(config, intake);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
