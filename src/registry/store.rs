//! Customer configuration storage.
//!
//! # Responsibilities
//! - Admit only configurations that pass validation
//! - Preserve registration order (domain resolution tie-break)
//! - Serve read-only lookups once built
//!
//! # Design Decisions
//! - Mutation lives on `StoreBuilder`, consumed by `build()`; the resulting
//!   `ConfigStore` has no write path
//! - Re-registering an id keeps its original position and takes the new value
//! - O(1) id lookup via HashMap index into an ordered Vec

use std::collections::HashMap;

use thiserror::Error;

use crate::model::CustomerConfig;
use crate::registry::validation::{self, ValidationResult};

/// Registration failure.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The configuration failed validation and was not admitted.
    #[error("configuration for customer '{customer_id}' rejected: {}", .result.errors.join("; "))]
    Rejected {
        customer_id: String,
        result: ValidationResult,
    },
}

/// Accepted registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub customer_id: String,
    /// Advisory warnings reported by the validator.
    pub warnings: Vec<String>,
    /// True when an existing entry with the same id was overwritten.
    pub replaced: bool,
}

/// Write side of the store, used only during startup.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    configs: Vec<CustomerConfig>,
    index: HashMap<String, usize>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and admit a configuration.
    ///
    /// A configuration with any validation error is never admitted.
    pub fn register(&mut self, config: CustomerConfig) -> Result<Registration, RegistryError> {
        let result = validation::validate(&config);
        if !result.is_valid {
            return Err(RegistryError::Rejected {
                customer_id: config.customer_id,
                result,
            });
        }

        let customer_id = config.customer_id.clone();
        let replaced = match self.index.get(&customer_id) {
            Some(&slot) => {
                tracing::warn!(
                    customer_id = %customer_id,
                    "Duplicate customer id; replacing earlier registration"
                );
                self.configs[slot] = config;
                true
            }
            None => {
                self.index.insert(customer_id.clone(), self.configs.len());
                self.configs.push(config);
                false
            }
        };

        Ok(Registration {
            customer_id,
            warnings: result.warnings,
            replaced,
        })
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Freeze the store.
    pub fn build(self) -> ConfigStore {
        ConfigStore {
            configs: self.configs,
            index: self.index,
        }
    }
}

/// Immutable set of admitted configurations.
///
/// Safe to share across threads without locking; there is no writer.
#[derive(Debug, Default)]
pub struct ConfigStore {
    configs: Vec<CustomerConfig>,
    index: HashMap<String, usize>,
}

impl ConfigStore {
    pub fn get(&self, customer_id: &str) -> Option<&CustomerConfig> {
        self.index.get(customer_id).map(|&slot| &self.configs[slot])
    }

    pub fn has(&self, customer_id: &str) -> bool {
        self.index.contains_key(customer_id)
    }

    /// Customer ids in registration order.
    pub fn all_ids(&self) -> Vec<&str> {
        self.configs.iter().map(|c| c.customer_id.as_str()).collect()
    }

    /// Configurations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CustomerConfig> {
        self.configs.iter()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
