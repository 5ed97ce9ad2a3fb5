//! Tenants: domain-addressed operating units within a customer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Tenant {
    /// Identifier, unique within the owning customer.
    pub id: String,

    pub name: String,

    /// Fully-qualified domain (e.g. "portal.example.com").
    pub domain: String,

    /// Subdomain label used for loose host matching.
    pub subdomain: String,

    /// Defaults to `true` when omitted, as for locations.
    #[serde(default = "default_active")]
    pub is_active: bool,

    pub limits: TenantLimits,

    pub features: FeatureFlags,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TenantLimits {
    pub max_users: u32,
    pub max_roles: u32,
}

impl Default for TenantLimits {
    fn default() -> Self {
        Self {
            max_users: 50,
            max_roles: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FeatureFlags {
    pub enabled: Vec<String>,
    pub disabled: Vec<String>,
    pub beta: Vec<String>,
}
