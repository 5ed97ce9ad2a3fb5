//! Service configuration schema.
//!
//! This module defines the settings of the registry process itself (not the
//! customer records it serves). All types derive Serde traits for
//! deserialization from TOML.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the registry service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub listener: ListenerConfig,

    /// Where customer records are loaded from and how rejects are handled.
    pub records: RecordsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Customer record source.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Directory holding one `*.toml` or `*.json` file per customer.
    pub directory: PathBuf,

    /// What to do when a record fails validation.
    pub on_invalid: RejectionPolicy,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("records"),
            on_invalid: RejectionPolicy::Abort,
        }
    }
}

/// Deployment policy for records that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RejectionPolicy {
    /// Refuse to start.
    #[default]
    Abort,
    /// Start without the rejected customer.
    Skip,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
