//! Cross-runtime call adapter.
//!
//! # Data Flow
//! ```text
//! argv: <function> [string args...]
//!     → Operation::from_str (camelCase function name)
//!     → dispatch (argument extraction, registry call)
//!     → serde_json::Value
//!     → stdout (bare result or Envelope) / stderr + non-zero exit
//! ```
//!
//! # Design Decisions
//! - Function names map to a closed `Operation` enum, not string matching at
//!   call sites
//! - Every lookup key arrives as a string; structured inputs arrive as JSON
//! - Failures are typed (`AdapterError`) and never swallowed

pub mod dispatch;

pub use dispatch::{dispatch, AdapterError, Envelope, Operation};
