//! Configuration registry subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (single phase):
//!     CustomerConfig records
//!     → validation.rs (errors reject, warnings logged)
//!     → store.rs StoreBuilder (registration order)
//!     → build() → ConfigStore (immutable)
//!     → ConfigRegistry (shared via Arc)
//!
//! Runtime (read-only):
//!     id / domain / subdomain / integration name
//!     → resolver.rs, views.rs, summary.rs
//!     → borrowed config or derived view, or None on a miss
//! ```
//!
//! # Design Decisions
//! - No global state: the registry is built once at process entry and passed
//!   by reference to every consumer
//! - All lookups take `&str` so string-only callers need no conversion
//! - Lookup misses are `None`/empty, never errors

pub mod resolver;
pub mod store;
pub mod summary;
pub mod validation;
pub mod views;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::model::{CustomerConfig, Environment, IndustryType, IntegrationSettings, Tenant};

pub use resolver::{brand_slug, Resolver};
pub use store::{ConfigStore, Registration, RegistryError, StoreBuilder};
pub use summary::{CustomerSummary, LocationsSummary, PlatformInfo, PricingSummary};
pub use validation::{ComplianceViolation, ValidationError, ValidationResult, ValidationWarning};
pub use views::DerivedViewBuilder;

/// Read-only facade over the admitted customer configurations.
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    store: ConfigStore,
}

impl ConfigRegistry {
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    /// Build a registry from records, failing on the first rejected one.
    pub fn from_configs(
        configs: impl IntoIterator<Item = CustomerConfig>,
    ) -> Result<Self, RegistryError> {
        let mut builder = StoreBuilder::new();
        for config in configs {
            builder.register(config)?;
        }
        Ok(Self::new(builder.build()))
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn customer_config(&self, customer_id: &str) -> Option<&CustomerConfig> {
        self.store.get(customer_id)
    }

    pub fn all_customer_ids(&self) -> Vec<&str> {
        self.store.all_ids()
    }

    pub fn is_valid_customer(&self, customer_id: &str) -> bool {
        self.store.has(customer_id)
    }

    pub fn customer_by_domain(&self, domain: &str) -> Option<&CustomerConfig> {
        Resolver::new(&self.store).by_domain(domain)
    }

    pub fn active_customers(&self) -> Vec<&CustomerConfig> {
        Resolver::new(&self.store).active_customers()
    }

    /// Validate an arbitrary configuration without registering it.
    pub fn validate_config(&self, config: &CustomerConfig) -> ValidationResult {
        validation::validate(config)
    }

    /// Re-validate an admitted configuration by id.
    pub fn validate_registered(&self, customer_id: &str) -> ValidationResult {
        match self.store.get(customer_id) {
            Some(config) => validation::validate(config),
            None => ValidationResult::not_found(customer_id),
        }
    }

    /// Environment tag, `development` for unknown customers.
    pub fn environment(&self, customer_id: &str) -> Environment {
        self.store
            .get(customer_id)
            .map(|c| c.environment)
            .unwrap_or_default()
    }

    pub fn compliance_frameworks(&self, customer_id: &str) -> Vec<&'static str> {
        self.views(customer_id)
            .map(|v| v.compliance_frameworks())
            .unwrap_or_default()
    }

    pub fn branding_vars(&self, customer_id: &str) -> BTreeMap<String, String> {
        self.views(customer_id)
            .map(|v| v.branding_vars())
            .unwrap_or_default()
    }

    pub fn tenant_by_subdomain(&self, customer_id: &str, subdomain: &str) -> Option<&Tenant> {
        self.views(customer_id)?.tenant_by_subdomain(subdomain)
    }

    pub fn integration_config(
        &self,
        customer_id: &str,
        integration_name: &str,
    ) -> Option<&IntegrationSettings> {
        self.views(customer_id)?.integration(integration_name)
    }

    pub fn pricing_summary(&self, customer_id: &str) -> PricingSummary {
        self.store
            .get(customer_id)
            .map(PricingSummary::for_config)
            .unwrap_or_default()
    }

    /// False for unknown customers or locations.
    pub fn is_location_open(
        &self,
        customer_id: &str,
        location_id: &str,
        at: DateTime<Utc>,
    ) -> bool {
        self.store
            .get(customer_id)
            .and_then(|c| c.locations.iter().find(|l| l.id == location_id))
            .is_some_and(|l| summary::is_open_at(l, at))
    }

    pub fn locations_summary(&self, customer_id: &str, at: DateTime<Utc>) -> LocationsSummary {
        self.store
            .get(customer_id)
            .map(|c| LocationsSummary::for_config(c, at))
            .unwrap_or_default()
    }

    pub fn customer_summaries(&self) -> Vec<CustomerSummary> {
        self.store.iter().map(CustomerSummary::for_config).collect()
    }

    pub fn platform_info(&self) -> PlatformInfo {
        PlatformInfo {
            version: env!("CARGO_PKG_VERSION"),
            supported_industries: IndustryType::ALL.to_vec(),
            compliance_frameworks: vec!["HIPAA", "GDPR", "SOX", "PCIDSS"],
            customer_count: self.store.len(),
        }
    }

    fn views(&self, customer_id: &str) -> Option<DerivedViewBuilder<'_>> {
        self.store.get(customer_id).map(DerivedViewBuilder::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::customer;

    #[test]
    fn test_unknown_customer_defaults() {
        let registry = ConfigRegistry::default();
        assert_eq!(registry.environment("NOPE"), Environment::Development);
        assert!(registry.compliance_frameworks("NOPE").is_empty());
        assert!(registry.branding_vars("NOPE").is_empty());
        assert!(registry.tenant_by_subdomain("NOPE", "acme").is_none());
        assert!(registry.integration_config("NOPE", "stripe").is_none());
        assert_eq!(registry.pricing_summary("NOPE"), PricingSummary::default());
        assert!(!registry.is_location_open("NOPE", "main", Utc::now()));
    }

    #[test]
    fn test_validate_registered() {
        let registry =
            ConfigRegistry::from_configs([customer("ACME", "Acme Health", "acme")]).unwrap();
        assert!(registry.validate_registered("ACME").is_valid);

        let missing = registry.validate_registered("NOPE");
        assert!(!missing.is_valid);
        assert_eq!(missing.errors, vec!["Customer configuration not found: NOPE"]);
    }

    #[test]
    fn test_from_configs_rejects_invalid() {
        let mut bad = customer("BAD", "Bad Co", "bad");
        bad.locations.clear();
        let result = ConfigRegistry::from_configs([customer("ACME", "Acme Health", "acme"), bad]);
        assert!(matches!(
            result,
            Err(RegistryError::Rejected { customer_id, .. }) if customer_id == "BAD"
        ));
    }

    #[test]
    fn test_platform_info_and_summaries() {
        let mut config = customer("ACME", "Acme Health", "acme");
        config.compliance.hipaa.enabled = true;
        let registry = ConfigRegistry::from_configs([config]).unwrap();

        let info = registry.platform_info();
        assert_eq!(info.customer_count, 1);
        assert_eq!(info.supported_industries.len(), 6);

        let summaries = registry.customer_summaries();
        assert_eq!(summaries[0].customer_id, "ACME");
        assert_eq!(summaries[0].compliance_frameworks, vec!["HIPAA"]);
        assert!(summaries[0].active);
    }
}
