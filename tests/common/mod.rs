//! Shared builders for integration tests.

#![allow(dead_code)]

use std::path::Path;

use config_registry::model::{
    Address, Branding, ColorPalette, CustomerConfig, Environment, FontPair, IndustryType,
    Location, Tenant,
};
use config_registry::ConfigRegistry;

/// A configuration that passes validation with no warnings.
pub fn customer(id: &str, company_name: &str, subdomain: &str) -> CustomerConfig {
    CustomerConfig {
        customer_id: id.to_string(),
        customer_name: company_name.to_string(),
        industry_type: Some(IndustryType::ProfessionalServices),
        environment: Environment::Production,
        config_version: "1.0.0".to_string(),
        branding: Some(Branding {
            company_name: company_name.to_string(),
            display_name: company_name.to_string(),
            colors: ColorPalette {
                primary: "#1A4D8F".to_string(),
                secondary: "#F2A541".to_string(),
                ..ColorPalette::default()
            },
            fonts: FontPair {
                primary: "Inter, sans-serif".to_string(),
                secondary: None,
            },
            ..Branding::default()
        }),
        locations: vec![Location {
            id: "hq".to_string(),
            name: "Headquarters".to_string(),
            address: Address {
                street: "100 Market St".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                postal_code: "94105".to_string(),
                country: "US".to_string(),
            },
            timezone: "America/Los_Angeles".to_string(),
            is_active: true,
            ..Location::default()
        }],
        tenants: vec![Tenant {
            id: format!("{}-app", subdomain),
            name: format!("{} App", company_name),
            domain: format!("app.{}.example.com", subdomain),
            subdomain: subdomain.to_string(),
            is_active: true,
            ..Tenant::default()
        }],
        ..CustomerConfig::default()
    }
}

/// The two-customer registry used across scenarios.
pub fn acme_and_widget() -> ConfigRegistry {
    ConfigRegistry::from_configs([
        customer("ACME", "Acme Corp", "acme"),
        customer("WIDGET", "Widget Works", "widget"),
    ])
    .unwrap()
}

/// Write a JSON record file into `dir`.
pub fn write_record(dir: &Path, file_name: &str, config: &CustomerConfig) {
    let body = serde_json::to_string_pretty(config).unwrap();
    std::fs::write(dir.join(file_name), body).unwrap();
}
