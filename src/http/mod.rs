//! HTTP read API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and propagated)
//!     → middleware/customer_context.rs (X-Customer-ID scoped routes)
//!     → handlers.rs (registry lookups)
//!     → response.rs (lookup misses → 404, bad input → 400)
//! ```
//!
//! # Design Decisions
//! - Handlers only read the registry; there is no write endpoint
//! - Host-based resolution lowercases and strips the port before matching

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, RegistryServer};
