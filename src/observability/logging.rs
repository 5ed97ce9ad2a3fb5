//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Select human or JSON output
//! - Route CLI logs to stderr so stdout stays machine-readable
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level
//! - Initialization is idempotent-safe (`try_init`), so tests can call it freely

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("config_registry={},tower_http={}", default_level, default_level).into()
    })
}

/// Initialize logging for the HTTP service.
pub fn init_logging(config: &ObservabilityConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(&config.log_level));
    let result = if config.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };
    if let Err(e) = result {
        eprintln!("logging already initialized: {}", e);
    }
}

/// Initialize logging for command-line tools: stderr only.
pub fn init_cli_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
