//! Valid configuration records for unit tests.

use crate::model::*;

/// A minimal valid customer with one location and one active tenant.
pub(crate) fn customer(id: &str, company_name: &str, subdomain: &str) -> CustomerConfig {
    CustomerConfig {
        customer_id: id.to_string(),
        customer_name: company_name.to_string(),
        industry_type: Some(IndustryType::Healthcare),
        environment: Environment::Production,
        config_version: "1.0.0".to_string(),
        branding: Some(Branding {
            company_name: company_name.to_string(),
            display_name: company_name.to_string(),
            logo: LogoAssets::default(),
            colors: ColorPalette {
                primary: "#2D5AA0".to_string(),
                secondary: "#E8B931".to_string(),
                ..ColorPalette::default()
            },
            fonts: FontPair {
                primary: "Inter, sans-serif".to_string(),
                secondary: None,
            },
        }),
        locations: vec![Location {
            id: "main".to_string(),
            name: "Main Office".to_string(),
            address: Address {
                street: "1 Main St".to_string(),
                city: "Denver".to_string(),
                state: "CO".to_string(),
                postal_code: "80202".to_string(),
                country: "US".to_string(),
            },
            timezone: "America/Denver".to_string(),
            is_active: true,
            ..Location::default()
        }],
        tenants: vec![Tenant {
            id: format!("{}-main", subdomain),
            name: company_name.to_string(),
            domain: format!("portal.{}.example.com", subdomain),
            subdomain: subdomain.to_string(),
            is_active: true,
            ..Tenant::default()
        }],
        ..CustomerConfig::default()
    }
}
