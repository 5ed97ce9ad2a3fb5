//! Customer configuration validation.
//!
//! # Responsibilities
//! - Structural completeness (identity, branding, locations, tenants)
//! - Cross-field regulatory consistency (HIPAA, PCI-DSS vs. encryption)
//! - Advisory warnings (weak password policy, HIPAA without MFA)
//!
//! # Design Decisions
//! - Returns all errors, not just the first
//! - Pure function: `&CustomerConfig → ValidationResult`, never fails
//! - Rule order is fixed so messages are reproducible for identical input
//! - Warnings never block registration

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::CustomerConfig;

/// Passwords shorter than this draw a warning.
pub const RECOMMENDED_MIN_PASSWORD_LENGTH: u32 = 8;

/// A violation that prevents a configuration from being registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("At least one location is required")]
    NoLocations,

    /// `position` is 1-based.
    #[error("Location {position} missing {field}")]
    LocationField { position: usize, field: &'static str },

    #[error("At least one tenant is required")]
    NoTenants,

    #[error("Tenant {position} missing {field}")]
    TenantField { position: usize, field: &'static str },

    #[error(transparent)]
    Compliance(#[from] ComplianceViolation),
}

/// Cross-field regulatory violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComplianceViolation {
    #[error("HIPAA compliance requires data-at-rest encryption")]
    HipaaWithoutEncryptionAtRest,

    #[error("PCI-DSS compliance requires data-in-transit encryption")]
    PciDssWithoutEncryptionInTransit,
}

/// Non-blocking advisories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    #[error(
        "Password minimum length {min_length} is below the recommended {} characters",
        RECOMMENDED_MIN_PASSWORD_LENGTH
    )]
    WeakPasswordPolicy { min_length: u32 },

    #[error("HIPAA-enabled customers should require multi-factor authentication")]
    HipaaWithoutMfa,
}

/// Outcome of validating one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn from_issues(errors: &[ValidationError], warnings: &[ValidationWarning]) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors: errors.iter().map(ToString::to_string).collect(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }

    /// Result for a configuration that could not be found.
    pub fn not_found(customer_id: &str) -> Self {
        Self {
            is_valid: false,
            errors: vec![format!("Customer configuration not found: {}", customer_id)],
            warnings: Vec::new(),
        }
    }
}

/// Typed validation report, before rendering to strings.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_result(&self) -> ValidationResult {
        ValidationResult::from_issues(&self.errors, &self.warnings)
    }
}

/// Validate a configuration and return the rendered result.
pub fn validate(config: &CustomerConfig) -> ValidationResult {
    inspect(config).to_result()
}

/// Validate a configuration and return the typed report.
pub fn inspect(config: &CustomerConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    check_identity(config, &mut report.errors);
    check_branding(config, &mut report.errors);
    check_locations(config, &mut report.errors);
    check_tenants(config, &mut report.errors);
    check_compliance(config, &mut report);
    report
}

fn check_identity(config: &CustomerConfig, errors: &mut Vec<ValidationError>) {
    if config.customer_id.is_empty() {
        errors.push(ValidationError::MissingField("customerId"));
    }
    if config.customer_name.is_empty() {
        errors.push(ValidationError::MissingField("customerName"));
    }
    if config.industry_type.is_none() {
        errors.push(ValidationError::MissingField("industryType"));
    }
}

fn check_branding(config: &CustomerConfig, errors: &mut Vec<ValidationError>) {
    let (company_name, primary) = match &config.branding {
        Some(b) => (b.company_name.as_str(), b.colors.primary.as_str()),
        None => ("", ""),
    };
    if company_name.is_empty() {
        errors.push(ValidationError::MissingField("branding.companyName"));
    }
    if primary.is_empty() {
        errors.push(ValidationError::MissingField("branding.colors.primary"));
    }
}

fn check_locations(config: &CustomerConfig, errors: &mut Vec<ValidationError>) {
    if config.locations.is_empty() {
        errors.push(ValidationError::NoLocations);
        return;
    }
    for (i, location) in config.locations.iter().enumerate() {
        let position = i + 1;
        if location.id.is_empty() {
            errors.push(ValidationError::LocationField { position, field: "id" });
        }
        if location.name.is_empty() {
            errors.push(ValidationError::LocationField { position, field: "name" });
        }
        if location.address.street.is_empty() {
            errors.push(ValidationError::LocationField {
                position,
                field: "address.street",
            });
        }
    }
}

fn check_tenants(config: &CustomerConfig, errors: &mut Vec<ValidationError>) {
    if config.tenants.is_empty() {
        errors.push(ValidationError::NoTenants);
        return;
    }
    for (i, tenant) in config.tenants.iter().enumerate() {
        let position = i + 1;
        if tenant.id.is_empty() {
            errors.push(ValidationError::TenantField { position, field: "id" });
        }
        if tenant.domain.is_empty() {
            errors.push(ValidationError::TenantField { position, field: "domain" });
        }
    }
}

fn check_compliance(config: &CustomerConfig, report: &mut ValidationReport) {
    let compliance = &config.compliance;
    let security = &config.security;

    if compliance.hipaa.enabled && !security.encryption.data_at_rest {
        report
            .errors
            .push(ComplianceViolation::HipaaWithoutEncryptionAtRest.into());
    }
    if compliance.pci_dss.enabled && !security.encryption.data_in_transit {
        report
            .errors
            .push(ComplianceViolation::PciDssWithoutEncryptionInTransit.into());
    }

    let min_length = security.authentication.password_policy.min_length;
    if min_length < RECOMMENDED_MIN_PASSWORD_LENGTH {
        report
            .warnings
            .push(ValidationWarning::WeakPasswordPolicy { min_length });
    }
    if compliance.hipaa.enabled && !security.authentication.mfa_required {
        report.warnings.push(ValidationWarning::HipaaWithoutMfa);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::customer;

    #[test]
    fn test_fully_compliant_config_passes_clean() {
        let mut config = customer("ACME", "Acme Health", "acme");
        config.compliance.hipaa.enabled = true;
        config.compliance.pci_dss.enabled = true;
        config.security.encryption.data_at_rest = true;
        config.security.encryption.data_in_transit = true;
        config.security.authentication.mfa_required = true;
        config.security.authentication.password_policy.min_length = 12;

        let result = validate(&config);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_identity_fields() {
        let mut config = customer("ACME", "Acme Health", "acme");
        config.customer_id.clear();
        config.customer_name.clear();
        config.industry_type = None;

        let result = validate(&config);
        assert!(!result.is_valid);
        assert_eq!(
            &result.errors[..3],
            &[
                "Missing required field: customerId",
                "Missing required field: customerName",
                "Missing required field: industryType",
            ]
        );
    }

    #[test]
    fn test_missing_branding_reports_both_fields() {
        let mut config = customer("ACME", "Acme Health", "acme");
        config.branding = None;

        let result = validate(&config);
        assert_eq!(
            result.errors,
            vec![
                "Missing required field: branding.companyName",
                "Missing required field: branding.colors.primary",
            ]
        );
    }

    #[test]
    fn test_empty_collections() {
        let mut config = customer("ACME", "Acme Health", "acme");
        config.locations.clear();
        config.tenants.clear();

        let result = validate(&config);
        assert!(!result.is_valid);
        assert!(result.errors.contains(&"At least one location is required".to_string()));
        assert!(result.errors.contains(&"At least one tenant is required".to_string()));
    }

    #[test]
    fn test_indexed_entry_errors() {
        let mut config = customer("ACME", "Acme Health", "acme");
        let mut second = config.locations[0].clone();
        second.id.clear();
        second.address.street.clear();
        config.locations.push(second);
        config.tenants[0].domain.clear();

        let result = validate(&config);
        assert_eq!(
            result.errors,
            vec![
                "Location 2 missing id",
                "Location 2 missing address.street",
                "Tenant 1 missing domain",
            ]
        );
    }

    #[test]
    fn test_hipaa_requires_encryption_at_rest() {
        let mut config = customer("ACME", "Acme Health", "acme");
        config.compliance.hipaa.enabled = true;
        config.security.encryption.data_at_rest = false;

        let report = inspect(&config);
        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec![ValidationError::Compliance(
                ComplianceViolation::HipaaWithoutEncryptionAtRest
            )]
        );
        let result = report.to_result();
        assert!(result.errors[0].contains("HIPAA"));
        assert!(result.errors[0].contains("data-at-rest"));
    }

    #[test]
    fn test_pci_requires_encryption_in_transit() {
        let mut config = customer("ACME", "Acme Health", "acme");
        config.compliance.pci_dss.enabled = true;
        config.security.encryption.data_in_transit = false;

        let result = validate(&config);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["PCI-DSS compliance requires data-in-transit encryption"]
        );
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut config = customer("ACME", "Acme Health", "acme");
        config.compliance.hipaa.enabled = true;
        config.security.authentication.mfa_required = false;
        config.security.authentication.password_policy.min_length = 6;

        let result = validate(&config);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("minimum length 6"));
        assert!(result.warnings[1].contains("multi-factor"));
    }

    #[test]
    fn test_encryption_ignored_without_framework() {
        let mut config = customer("ACME", "Acme Health", "acme");
        config.security.encryption.data_at_rest = false;
        config.security.encryption.data_in_transit = false;

        assert!(validate(&config).is_valid);
    }
}
