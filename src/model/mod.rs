//! Customer configuration data model.
//!
//! # Data Flow
//! ```text
//! record file (TOML/JSON)
//!     → serde (camelCase keys)
//!     → CustomerConfig (owned, nested sections by value)
//!     → registry::validation
//!     → registry::store (read-only after build)
//! ```
//!
//! # Design Decisions
//! - Every nested section is owned by its `CustomerConfig`; nothing is shared
//! - Optional palette/font entries stay `Option` so derived views can apply defaults
//! - Open-ended maps hold typed variants (`FieldValue`, `IntegrationSettings`)
//! - Tenant and location ids are only unique within their customer

pub mod branding;
pub mod compliance;
pub mod customer;
pub mod integration;
pub mod location;
pub mod pricing;
pub mod security;
pub mod tenant;

pub use branding::{Branding, ColorPalette, FontPair, LogoAssets};
pub use compliance::{Compliance, GdprPolicy, HipaaPolicy, PciDssPolicy, SoxPolicy};
pub use customer::{CustomerConfig, Environment, FieldValue, IndustryType};
pub use integration::{Analytics, ApiAccess, IntegrationSettings, Integrations, WebhookEndpoint};
pub use location::{Address, BusinessHours, Coordinates, DayHours, Location};
pub use pricing::{AddOn, BillingCycle, BillingTerms, CustomWorkRates, Plan, Pricing};
pub use security::{AuditPolicy, AuthenticationPolicy, EncryptionPolicy, PasswordPolicy, Security};
pub use tenant::{FeatureFlags, Tenant, TenantLimits};

#[cfg(test)]
pub(crate) mod fixtures;
