//! Function-name dispatch onto the registry.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::CustomerConfig;
use crate::registry::ConfigRegistry;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("{operation} requires argument {position} ({name})")]
    MissingArgument {
        operation: Operation,
        position: usize,
        name: &'static str,
    },

    #[error("{operation}: invalid {name}: {reason}")]
    InvalidArgument {
        operation: Operation,
        name: &'static str,
        reason: String,
    },

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Callable registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetCustomerConfig,
    GetAllCustomerIds,
    IsValidCustomer,
    GetCustomerByDomain,
    GetActiveCustomers,
    ValidateCustomerConfig,
    ValidateRegisteredCustomer,
    GetCustomerEnvironment,
    GetCustomerComplianceFrameworks,
    GetCustomerBrandingVars,
    GetCustomerTenantBySubdomain,
    GetCustomerIntegrationConfig,
    GetCustomerPricingSummary,
    GetCustomerLocationsSummary,
    GetPlatformInfo,
}

impl Operation {
    pub const ALL: [Operation; 15] = [
        Operation::GetCustomerConfig,
        Operation::GetAllCustomerIds,
        Operation::IsValidCustomer,
        Operation::GetCustomerByDomain,
        Operation::GetActiveCustomers,
        Operation::ValidateCustomerConfig,
        Operation::ValidateRegisteredCustomer,
        Operation::GetCustomerEnvironment,
        Operation::GetCustomerComplianceFrameworks,
        Operation::GetCustomerBrandingVars,
        Operation::GetCustomerTenantBySubdomain,
        Operation::GetCustomerIntegrationConfig,
        Operation::GetCustomerPricingSummary,
        Operation::GetCustomerLocationsSummary,
        Operation::GetPlatformInfo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetCustomerConfig => "getCustomerConfig",
            Operation::GetAllCustomerIds => "getAllCustomerIds",
            Operation::IsValidCustomer => "isValidCustomer",
            Operation::GetCustomerByDomain => "getCustomerByDomain",
            Operation::GetActiveCustomers => "getActiveCustomers",
            Operation::ValidateCustomerConfig => "validateCustomerConfig",
            Operation::ValidateRegisteredCustomer => "validateRegisteredCustomer",
            Operation::GetCustomerEnvironment => "getCustomerEnvironment",
            Operation::GetCustomerComplianceFrameworks => "getCustomerComplianceFrameworks",
            Operation::GetCustomerBrandingVars => "getCustomerBrandingVars",
            Operation::GetCustomerTenantBySubdomain => "getCustomerTenantBySubdomain",
            Operation::GetCustomerIntegrationConfig => "getCustomerIntegrationConfig",
            Operation::GetCustomerPricingSummary => "getCustomerPricingSummary",
            Operation::GetCustomerLocationsSummary => "getCustomerLocationsSummary",
            Operation::GetPlatformInfo => "getPlatformInfo",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| AdapterError::UnknownFunction(s.to_string()))
    }
}

/// Structured reply for callers that want an explicit discriminant.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Ok { result: Value },
    Error { message: String },
}

impl Envelope {
    pub fn from_outcome(outcome: &Result<Value, AdapterError>) -> Self {
        match outcome {
            Ok(result) => Envelope::Ok {
                result: result.clone(),
            },
            Err(e) => Envelope::Error {
                message: e.to_string(),
            },
        }
    }
}

struct Args<'a> {
    operation: Operation,
    values: &'a [String],
}

impl<'a> Args<'a> {
    fn required(&self, position: usize, name: &'static str) -> Result<&'a str, AdapterError> {
        self.values
            .get(position)
            .map(String::as_str)
            .ok_or(AdapterError::MissingArgument {
                operation: self.operation,
                position: position + 1,
                name,
            })
    }

    fn optional(&self, position: usize) -> Option<&'a str> {
        self.values.get(position).map(String::as_str)
    }
}

/// Invoke `function` with positional string `args` against `registry`.
///
/// Absent lookups encode as JSON `null`.
pub fn dispatch(
    registry: &ConfigRegistry,
    function: &str,
    args: &[String],
) -> Result<Value, AdapterError> {
    let operation: Operation = function.parse()?;
    let args = Args {
        operation,
        values: args,
    };

    let value = match operation {
        Operation::GetCustomerConfig => {
            serde_json::to_value(registry.customer_config(args.required(0, "customerId")?))?
        }
        Operation::GetAllCustomerIds => serde_json::to_value(registry.all_customer_ids())?,
        Operation::IsValidCustomer => {
            serde_json::to_value(registry.is_valid_customer(args.required(0, "customerId")?))?
        }
        Operation::GetCustomerByDomain => {
            serde_json::to_value(registry.customer_by_domain(args.required(0, "domain")?))?
        }
        Operation::GetActiveCustomers => serde_json::to_value(registry.active_customers())?,
        Operation::ValidateCustomerConfig => {
            let raw = args.required(0, "config")?;
            let config: CustomerConfig =
                serde_json::from_str(raw).map_err(|e| AdapterError::InvalidArgument {
                    operation,
                    name: "config",
                    reason: e.to_string(),
                })?;
            serde_json::to_value(registry.validate_config(&config))?
        }
        Operation::ValidateRegisteredCustomer => {
            serde_json::to_value(registry.validate_registered(args.required(0, "customerId")?))?
        }
        Operation::GetCustomerEnvironment => {
            serde_json::to_value(registry.environment(args.required(0, "customerId")?))?
        }
        Operation::GetCustomerComplianceFrameworks => serde_json::to_value(
            registry.compliance_frameworks(args.required(0, "customerId")?),
        )?,
        Operation::GetCustomerBrandingVars => {
            serde_json::to_value(registry.branding_vars(args.required(0, "customerId")?))?
        }
        Operation::GetCustomerTenantBySubdomain => serde_json::to_value(
            registry.tenant_by_subdomain(
                args.required(0, "customerId")?,
                args.required(1, "subdomain")?,
            ),
        )?,
        Operation::GetCustomerIntegrationConfig => serde_json::to_value(
            registry.integration_config(
                args.required(0, "customerId")?,
                args.required(1, "integrationName")?,
            ),
        )?,
        Operation::GetCustomerPricingSummary => {
            serde_json::to_value(registry.pricing_summary(args.required(0, "customerId")?))?
        }
        Operation::GetCustomerLocationsSummary => {
            let customer_id = args.required(0, "customerId")?;
            let at = match args.optional(1) {
                Some(raw) => DateTime::parse_from_rfc3339(raw)
                    .map_err(|e| AdapterError::InvalidArgument {
                        operation,
                        name: "at",
                        reason: e.to_string(),
                    })?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            serde_json::to_value(registry.locations_summary(customer_id, at))?
        }
        Operation::GetPlatformInfo => serde_json::to_value(registry.platform_info())?,
    };

    Ok(value)
}
