//! Startup orchestration.
//!
//! # Responsibilities
//! - Load customer records from the configured directory
//! - Validate and register each record in file order
//! - Report warnings without blocking admission
//! - Freeze the store into a read-only registry
//!
//! # Design Decisions
//! - `Abort` policy: the first rejected record stops startup, carrying every
//!   error for that record
//! - `Skip` policy: rejected records are logged at error level and left out

use thiserror::Error;

use crate::config::{load_records, RecordError, RecordsConfig, RejectionPolicy};
use crate::model::CustomerConfig;
use crate::observability::metrics;
use crate::registry::{ConfigRegistry, RegistryError, StoreBuilder};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Records(#[from] RecordError),

    #[error(transparent)]
    Rejected(#[from] RegistryError),
}

/// Load records from disk and build the registry.
pub fn bootstrap(config: &RecordsConfig) -> Result<ConfigRegistry, StartupError> {
    tracing::info!(directory = %config.directory.display(), "Loading customer records");
    let records = load_records(&config.directory)?;
    register_all(records, config.on_invalid)
}

/// Validate and register `records` in order under `policy`.
pub fn register_all(
    records: Vec<CustomerConfig>,
    policy: RejectionPolicy,
) -> Result<ConfigRegistry, StartupError> {
    let mut builder = StoreBuilder::new();

    for record in records {
        match builder.register(record) {
            Ok(registration) => {
                for warning in &registration.warnings {
                    tracing::warn!(
                        customer_id = %registration.customer_id,
                        warning = %warning,
                        "Configuration warning"
                    );
                }
                metrics::record_validation_warnings(registration.warnings.len());
                metrics::record_registration(if registration.replaced {
                    "replaced"
                } else {
                    "admitted"
                });
                tracing::info!(
                    customer_id = %registration.customer_id,
                    warnings = registration.warnings.len(),
                    "Customer registered"
                );
            }
            Err(RegistryError::Rejected { customer_id, result }) => {
                for error in &result.errors {
                    tracing::error!(
                        customer_id = %customer_id,
                        error = %error,
                        "Configuration rejected"
                    );
                }
                match policy {
                    RejectionPolicy::Abort => {
                        metrics::record_registration("rejected");
                        return Err(RegistryError::Rejected { customer_id, result }.into());
                    }
                    RejectionPolicy::Skip => {
                        metrics::record_registration("skipped");
                        tracing::warn!(customer_id = %customer_id, "Skipping rejected customer");
                    }
                }
            }
        }
    }

    let registry = ConfigRegistry::new(builder.build());
    metrics::record_customer_count(registry.store().len());
    tracing::info!(customers = registry.store().len(), "Configuration registry ready");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::customer;

    fn with_bad_record() -> Vec<CustomerConfig> {
        let mut bad = customer("BAD", "Bad Co", "bad");
        bad.compliance.hipaa.enabled = true;
        bad.security.encryption.data_at_rest = false;
        vec![
            customer("ACME", "Acme Health", "acme"),
            bad,
            customer("WIDGET", "Widget Co", "widget"),
        ]
    }

    #[test]
    fn test_abort_policy_fails_startup() {
        let err = register_all(with_bad_record(), RejectionPolicy::Abort).unwrap_err();
        match err {
            StartupError::Rejected(RegistryError::Rejected { customer_id, result }) => {
                assert_eq!(customer_id, "BAD");
                assert!(result.errors[0].contains("HIPAA"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_skip_policy_excludes_rejected() {
        let registry = register_all(with_bad_record(), RejectionPolicy::Skip).unwrap();
        assert_eq!(registry.all_customer_ids(), vec!["ACME", "WIDGET"]);
        assert!(!registry.is_valid_customer("BAD"));
    }

    #[test]
    fn test_bootstrap_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let record = serde_json::to_string(&customer("ACME", "Acme Health", "acme")).unwrap();
        std::fs::write(dir.path().join("acme.json"), record).unwrap();

        let config = RecordsConfig {
            directory: dir.path().to_path_buf(),
            on_invalid: RejectionPolicy::Abort,
        };
        let registry = bootstrap(&config).unwrap();
        assert_eq!(
            registry.customer_config("ACME"),
            Some(&customer("ACME", "Acme Health", "acme"))
        );
    }
}
