//! End-to-end registry behaviour through the public API.

use chrono::{TimeZone, Utc};
use serde_json::json;

use config_registry::adapter::{dispatch, AdapterError};
use config_registry::config::{load_records, RecordsConfig, RejectionPolicy};
use config_registry::lifecycle::{bootstrap, StartupError};
use config_registry::model::{CustomerConfig, Environment, IntegrationSettings};
use config_registry::registry::{ConfigRegistry, RegistryError};

mod common;

fn hipaa_and_pci(id: &str) -> CustomerConfig {
    let mut config = common::customer(id, "Acme Corp", "acme");
    config.compliance.hipaa.enabled = true;
    config.compliance.pci_dss.enabled = true;
    config.security.encryption.data_at_rest = true;
    config.security.encryption.data_in_transit = true;
    config.security.authentication.mfa_required = true;
    config.security.authentication.password_policy.min_length = 12;
    config
}

#[test]
fn test_compliant_config_validates_clean() {
    let registry = ConfigRegistry::from_configs([hipaa_and_pci("ACME")]).unwrap();
    let result = registry.validate_registered("ACME");

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_hipaa_without_encryption_at_rest_is_rejected() {
    let mut config = hipaa_and_pci("ACME");
    config.security.encryption.data_at_rest = false;

    let result = ConfigRegistry::default().validate_config(&config);
    assert!(!result.is_valid);
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("HIPAA") && e.contains("at-rest")));

    let err = ConfigRegistry::from_configs([config]).unwrap_err();
    assert!(matches!(err, RegistryError::Rejected { customer_id, .. } if customer_id == "ACME"));
}

#[test]
fn test_config_without_tenants_is_invalid() {
    let mut config = common::customer("ACME", "Acme Corp", "acme");
    config.tenants.clear();

    let result = ConfigRegistry::default().validate_config(&config);
    assert!(!result.is_valid);
    assert!(result
        .errors
        .contains(&"At least one tenant is required".to_string()));
}

#[test]
fn test_domain_resolution() {
    let registry = common::acme_and_widget();

    let found = registry.customer_by_domain("app.acme.example.com").unwrap();
    assert_eq!(found.customer_id, "ACME");
    assert!(registry.customer_by_domain("unknown.example.com").is_none());
}

#[test]
fn test_branding_vars_fill_defaults() {
    let registry = common::acme_and_widget();
    let vars = registry.branding_vars("ACME");

    assert_eq!(vars["--accent-color"], "#F5F5F5");
    assert_eq!(vars["--secondary-font"], vars["--primary-font"]);
    assert_eq!(vars["--primary-color"], "#1A4D8F");
}

#[test]
fn test_only_enabled_frameworks_listed() {
    let mut config = common::customer("ACME", "Acme Corp", "acme");
    config.compliance.gdpr.enabled = true;
    let registry = ConfigRegistry::from_configs([config]).unwrap();

    assert_eq!(registry.compliance_frameworks("ACME"), vec!["GDPR"]);
}

#[test]
fn test_registered_config_round_trips_through_json() {
    let original = hipaa_and_pci("ACME");
    let registry = ConfigRegistry::from_configs([original.clone()]).unwrap();

    let encoded = serde_json::to_string(registry.customer_config("ACME").unwrap()).unwrap();
    let decoded: CustomerConfig = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_duplicate_id_replaces_in_place() {
    let mut replacement = common::customer("ACME", "Acme Renamed", "acme2");
    replacement.environment = Environment::Staging;

    let registry = ConfigRegistry::from_configs([
        common::customer("ACME", "Acme Corp", "acme"),
        common::customer("WIDGET", "Widget Works", "widget"),
        replacement,
    ])
    .unwrap();

    assert_eq!(registry.all_customer_ids(), vec!["ACME", "WIDGET"]);
    assert_eq!(registry.environment("ACME"), Environment::Staging);
    assert_eq!(
        registry.customer_config("ACME").unwrap().customer_name,
        "Acme Renamed"
    );
}

#[test]
fn test_shipped_records_load() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("records");
    let registry = bootstrap(&RecordsConfig {
        directory: dir,
        on_invalid: RejectionPolicy::Abort,
    })
    .unwrap();

    assert_eq!(registry.all_customer_ids(), vec!["SERENITY", "SUMMIT"]);
    assert_eq!(
        registry.compliance_frameworks("SUMMIT"),
        vec!["GDPR", "SOX", "PCIDSS"]
    );
    assert_eq!(
        registry.customer_by_domain("book.serenity.example.com").unwrap().customer_id,
        "SERENITY"
    );
    assert_eq!(registry.pricing_summary("SUMMIT").monthly_total, 1799.0);
    assert!(matches!(
        registry.integration_config("SERENITY", "square"),
        Some(IntegrationSettings::Payments { live_mode: true, .. })
    ));

    // 2024-09-16 is a Monday: 10:00 in Denver is 16:00 UTC.
    let monday = Utc.with_ymd_and_hms(2024, 9, 16, 16, 0, 0).unwrap();
    assert!(registry.is_location_open("SERENITY", "boulder", monday));
    let sunday = Utc.with_ymd_and_hms(2024, 9, 15, 18, 0, 0).unwrap();
    assert!(!registry.is_location_open("SERENITY", "boulder", sunday));

    let active: Vec<&str> = registry
        .active_customers()
        .iter()
        .map(|c| c.customer_id.as_str())
        .collect();
    assert_eq!(active, vec!["SERENITY", "SUMMIT"]);
}

#[test]
fn test_bootstrap_policies() {
    let dir = tempfile::tempdir().unwrap();
    let mut bad = common::customer("BAD", "Bad Co", "bad");
    bad.locations.clear();

    let acme = common::customer("ACME", "Acme Corp", "acme");
    let widget = common::customer("WIDGET", "Widget Works", "widget");
    common::write_record(dir.path(), "01-acme.json", &acme);
    common::write_record(dir.path(), "02-bad.json", &bad);
    common::write_record(dir.path(), "03-widget.json", &widget);
    std::fs::write(dir.path().join("README.md"), "not a record").unwrap();

    assert_eq!(load_records(dir.path()).unwrap().len(), 3);

    let abort = bootstrap(&RecordsConfig {
        directory: dir.path().to_path_buf(),
        on_invalid: RejectionPolicy::Abort,
    });
    assert!(matches!(abort, Err(StartupError::Rejected(_))));

    let skipped = bootstrap(&RecordsConfig {
        directory: dir.path().to_path_buf(),
        on_invalid: RejectionPolicy::Skip,
    })
    .unwrap();
    assert_eq!(skipped.all_customer_ids(), vec!["ACME", "WIDGET"]);
}

#[test]
fn test_adapter_dispatch() {
    let registry = common::acme_and_widget();
    let args = |values: &[&str]| values.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(
        dispatch(&registry, "getAllCustomerIds", &[]).unwrap(),
        json!(["ACME", "WIDGET"])
    );
    assert_eq!(
        dispatch(&registry, "getCustomerByDomain", &args(&["app.widget.example.com"]))
            .unwrap()["customerId"],
        json!("WIDGET")
    );
    assert_eq!(
        dispatch(&registry, "getCustomerConfig", &args(&["NOPE"])).unwrap(),
        json!(null)
    );
    assert!(matches!(
        dispatch(&registry, "dropAllCustomers", &[]),
        Err(AdapterError::UnknownFunction(_))
    ));
    assert!(matches!(
        dispatch(&registry, "getCustomerTenantBySubdomain", &args(&["ACME"])),
        Err(AdapterError::MissingArgument { position: 2, .. })
    ));
}
