//! Domain and activity-based customer lookup.
//!
//! # Responsibilities
//! - Resolve an inbound domain to a customer configuration
//! - List customers with at least one active tenant
//!
//! # Design Decisions
//! - Loose substring matching, not DNS-label matching: a domain may contain
//!   another customer's slug or subdomain, and the first customer in
//!   registration order wins
//! - Brand slug is checked before tenants, per customer
//! - Empty slugs and empty subdomains never match (they are substrings of
//!   every domain)

use crate::model::CustomerConfig;
use crate::registry::store::ConfigStore;

/// Normalized company name: lowercased with all whitespace removed.
pub fn brand_slug(company_name: &str) -> String {
    company_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Read-only lookups over a built store.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a ConfigStore,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// First configuration, in registration order, matching `domain`.
    pub fn by_domain(&self, domain: &str) -> Option<&'a CustomerConfig> {
        self.store.iter().find(|config| matches_domain(config, domain))
    }

    /// Configurations with at least one active tenant, in registration order.
    pub fn active_customers(&self) -> Vec<&'a CustomerConfig> {
        self.store
            .iter()
            .filter(|config| config.tenants.iter().any(|t| t.is_active))
            .collect()
    }
}

/// Slug containment, exact tenant domain, or tenant subdomain containment.
///
/// An empty slug (blank company name) or empty subdomain is treated as absent
/// and matches nothing, although the empty string is a substring of every
/// domain.
fn matches_domain(config: &CustomerConfig, domain: &str) -> bool {
    if let Some(branding) = &config.branding {
        let slug = brand_slug(&branding.company_name);
        if !slug.is_empty() && domain.contains(&slug) {
            return true;
        }
    }

    config.tenants.iter().any(|tenant| {
        tenant.domain == domain
            || (!tenant.subdomain.is_empty() && domain.contains(&tenant.subdomain))
    })
}
