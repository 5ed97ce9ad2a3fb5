//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load records → Validate each → Register admitted → Freeze store
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C received → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Startup is the only phase that writes registry state
//! - Fail fast: under the default policy any rejected record is fatal
//! - Listeners start last (traffic only once the registry is frozen)

pub mod shutdown;
pub mod startup;

pub use shutdown::shutdown_signal;
pub use startup::{bootstrap, register_all, StartupError};
