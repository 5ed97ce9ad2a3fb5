//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! service config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!
//! records directory (*.toml / *.json)
//!     → records.rs (one CustomerConfig per file, filename order)
//!     → lifecycle::startup (registry bootstrap)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All service fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod records;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use records::{load_records, RecordError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, RecordsConfig, RejectionPolicy, ServiceConfig,
};
