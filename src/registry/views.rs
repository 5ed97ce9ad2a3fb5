//! Derived presentation and compliance views.
//!
//! # Responsibilities
//! - CSS variable map from branding, with palette/font defaults
//! - Enabled compliance framework labels in declared order
//! - Tenant lookup by subdomain, integration lookup by name
//!
//! # Design Decisions
//! - Views borrow from the stored configuration; nothing is cached
//! - BTreeMap output so serialized variable maps are stable

use std::collections::BTreeMap;

use crate::model::{CustomerConfig, IntegrationSettings, Tenant};

pub const PRIMARY_COLOR_VAR: &str = "--primary-color";
pub const SECONDARY_COLOR_VAR: &str = "--secondary-color";
pub const ACCENT_COLOR_VAR: &str = "--accent-color";
pub const BACKGROUND_COLOR_VAR: &str = "--background-color";
pub const TEXT_COLOR_VAR: &str = "--text-color";
pub const PRIMARY_FONT_VAR: &str = "--primary-font";
pub const SECONDARY_FONT_VAR: &str = "--secondary-font";

/// Builds derived views for one configuration.
#[derive(Debug, Clone, Copy)]
pub struct DerivedViewBuilder<'a> {
    config: &'a CustomerConfig,
}

impl<'a> DerivedViewBuilder<'a> {
    pub fn new(config: &'a CustomerConfig) -> Self {
        Self { config }
    }

    /// Uppercase labels of enabled frameworks: HIPAA, GDPR, SOX, PCIDSS order.
    pub fn compliance_frameworks(&self) -> Vec<&'static str> {
        self.config
            .compliance
            .frameworks()
            .into_iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(label, _)| label)
            .collect()
    }

    /// CSS custom properties for the customer's theme. Empty without branding.
    pub fn branding_vars(&self) -> BTreeMap<String, String> {
        let Some(branding) = &self.config.branding else {
            return BTreeMap::new();
        };
        let colors = &branding.colors;
        let fonts = &branding.fonts;

        [
            (PRIMARY_COLOR_VAR, colors.primary.as_str()),
            (SECONDARY_COLOR_VAR, colors.secondary.as_str()),
            (ACCENT_COLOR_VAR, colors.accent_or_default()),
            (BACKGROUND_COLOR_VAR, colors.background_or_default()),
            (TEXT_COLOR_VAR, colors.text_or_default()),
            (PRIMARY_FONT_VAR, fonts.primary.as_str()),
            (SECONDARY_FONT_VAR, fonts.secondary_or_primary()),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
    }

    /// First tenant, in declaration order, whose subdomain equals `subdomain`.
    pub fn tenant_by_subdomain(&self, subdomain: &str) -> Option<&'a Tenant> {
        self.config.tenants.iter().find(|t| t.subdomain == subdomain)
    }

    pub fn integration(&self, name: &str) -> Option<&'a IntegrationSettings> {
        self.config.integrations.third_party.get(name)
    }
}
