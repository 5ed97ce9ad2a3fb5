//! Multi-tenant customer configuration registry.

pub mod adapter;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod registry;

pub use config::schema::ServiceConfig;
pub use http::RegistryServer;
pub use model::CustomerConfig;
pub use registry::{ConfigRegistry, ValidationResult};
