//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup and HTTP edges produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout/stderr, human or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - The registry core stays side-effect free; recording happens at the edges
//! - Request ID flows through every HTTP log line
//! - Metrics are cheap (atomic increments)

pub mod logging;
pub mod metrics;
