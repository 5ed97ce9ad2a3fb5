//! Analytics toggles and third-party integrations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::FieldValue;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Analytics {
    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,

    pub retention_days: u32,

    /// Third-party analytics services keyed by name, with on/off toggles.
    pub services: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Integrations {
    pub api: ApiAccess,

    pub webhooks: Vec<WebhookEndpoint>,

    /// Named third-party integrations.
    pub third_party: BTreeMap<String, IntegrationSettings>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiAccess {
    pub rate_limit_per_minute: u32,
    /// Key references (names in the secret store, never key material).
    pub keys: Vec<String>,
}

impl Default for ApiAccess {
    fn default() -> Self {
        Self {
            rate_limit_per_minute: 600,
            keys: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEndpoint {
    pub url: String,

    #[serde(default)]
    pub events: Vec<String>,

    #[serde(default = "default_webhook_active")]
    pub active: bool,
}

fn default_webhook_active() -> bool {
    true
}

/// Settings for one third-party integration, discriminated by `kind`.
///
/// Known kinds are typed; anything else goes through `Custom` so new
/// integrations need no schema change.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum IntegrationSettings {
    Payments {
        provider: String,
        account_id: String,
        #[serde(default)]
        live_mode: bool,
    },
    Scheduling {
        provider: String,
        calendar_id: String,
    },
    Messaging {
        provider: String,
        sender: String,
    },
    Custom {
        #[serde(default)]
        fields: BTreeMap<String, FieldValue>,
    },
}
