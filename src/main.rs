//! Customer configuration registry service.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │              CONFIG REGISTRY                 │
//!                        │                                              │
//!   records/*.toml ──────┼─▶ config::records ─▶ registry::validation    │
//!                        │                           │                  │
//!                        │                           ▼                  │
//!                        │                    registry::store           │
//!                        │               (StoreBuilder → ConfigStore)   │
//!                        │                           │                  │
//!                        │                           ▼                  │
//!   HTTP client ─────────┼─▶ http::server ─▶ ConfigRegistry (Arc)       │
//!                        │                    resolver / views /        │
//!   registry-cli ────────┼─▶ adapter ───────▶ summary                   │
//!                        │                                              │
//!                        │  ┌────────────────────────────────────────┐  │
//!                        │  │ observability (logs, metrics)          │  │
//!                        │  │ lifecycle (startup, shutdown)          │  │
//!                        │  └────────────────────────────────────────┘  │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use config_registry::config::{load_config, ServiceConfig};
use config_registry::http::RegistryServer;
use config_registry::lifecycle::bootstrap;
use config_registry::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "config-registry")]
#[command(about = "Serves validated customer configurations over HTTP", long_about = None)]
struct Cli {
    /// Service configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the customer records directory.
    #[arg(short, long)]
    records: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(records) = cli.records {
        config.records.directory = records;
    }

    logging::init_logging(&config.observability);
    tracing::info!("config-registry v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Startup is the only phase that writes registry state.
    let registry = match bootstrap(&config.records) {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            tracing::error!(error = %e, "Registry bootstrap failed; refusing to serve");
            return Err(e.into());
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        customers = registry.store().len(),
        "Listening for connections"
    );

    let server = RegistryServer::new(registry, &config.listener);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
