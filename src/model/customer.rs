//! Root customer configuration record.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::value::StrDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{
    Analytics, Branding, Compliance, Integrations, Location, Pricing, Security, Tenant,
};

/// Complete configuration for one customer of the platform.
///
/// String fields default to empty so that an omitted value reaches the
/// validator as "missing" rather than failing deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerConfig {
    /// Unique customer identifier within the registry.
    pub customer_id: String,

    /// Legal or trading name of the customer.
    pub customer_name: String,

    /// Vertical the customer operates in. An empty string reads as absent.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_industry"
    )]
    pub industry_type: Option<IndustryType>,

    /// Deployment environment tag.
    pub environment: Environment,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Version of the record schema the file was authored against.
    pub config_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,

    pub locations: Vec<Location>,

    pub compliance: Compliance,

    pub security: Security,

    pub pricing: Pricing,

    pub tenants: Vec<Tenant>,

    pub analytics: Analytics,

    pub integrations: Integrations,

    /// Industry-specific extension fields.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<String, FieldValue>,
}

/// Closed set of supported customer verticals.
fn deserialize_industry<'de, D>(deserializer: D) -> Result<Option<IndustryType>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => IndustryType::deserialize(StrDeserializer::<D::Error>::new(raw)).map(Some),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryType {
    SpaWellness,
    FinancialServices,
    Equestrian,
    PropertyManagement,
    Healthcare,
    ProfessionalServices,
}

impl IndustryType {
    /// Every supported vertical, in declaration order.
    pub const ALL: [IndustryType; 6] = [
        IndustryType::SpaWellness,
        IndustryType::FinancialServices,
        IndustryType::Equestrian,
        IndustryType::PropertyManagement,
        IndustryType::Healthcare,
        IndustryType::ProfessionalServices,
    ];

    /// Wire name of the vertical.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndustryType::SpaWellness => "spa_wellness",
            IndustryType::FinancialServices => "financial_services",
            IndustryType::Equestrian => "equestrian",
            IndustryType::PropertyManagement => "property_management",
            IndustryType::Healthcare => "healthcare",
            IndustryType::ProfessionalServices => "professional_services",
        }
    }
}

impl fmt::Display for IndustryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment environment of a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of an open-ended custom field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_wire_names() {
        let parsed: IndustryType = serde_json::from_str("\"spa_wellness\"").unwrap();
        assert_eq!(parsed, IndustryType::SpaWellness);
        assert_eq!(IndustryType::ProfessionalServices.to_string(), "professional_services");
        assert!(serde_json::from_str::<IndustryType>("\"retail\"").is_err());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let config: CustomerConfig = serde_json::from_str("{}").unwrap();
        assert!(config.customer_id.is_empty());
        assert!(config.industry_type.is_none());
        assert_eq!(config.environment, Environment::Development);
        assert!(config.branding.is_none());
    }

    #[test]
    fn test_empty_industry_reads_as_absent() {
        let config: CustomerConfig = serde_json::from_str(r#"{"industryType": ""}"#).unwrap();
        assert!(config.industry_type.is_none());

        let config: CustomerConfig = toml::from_str(r#"industryType = "equestrian""#).unwrap();
        assert_eq!(config.industry_type, Some(IndustryType::Equestrian));

        assert!(serde_json::from_str::<CustomerConfig>(r#"{"industryType": "retail"}"#).is_err());
    }

    #[test]
    fn test_custom_field_variants() {
        let fields: BTreeMap<String, FieldValue> = serde_json::from_str(
            r#"{"stalls": 40, "indoorArena": true,
                "disciplines": ["dressage"], "notes": "barn A"}"#,
        )
        .unwrap();
        assert_eq!(fields["stalls"], FieldValue::Number(40.0));
        assert_eq!(fields["indoorArena"], FieldValue::Flag(true));
        assert_eq!(fields["disciplines"], FieldValue::List(vec!["dressage".into()]));
        assert_eq!(fields["notes"], FieldValue::Text("barn A".into()));
    }
}
