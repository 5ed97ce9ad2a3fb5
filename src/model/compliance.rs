//! Regulatory framework blocks.

use serde::{Deserialize, Serialize};

/// Named compliance frameworks. Field order is the declared framework order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Compliance {
    pub hipaa: HipaaPolicy,
    pub gdpr: GdprPolicy,
    pub sox: SoxPolicy,
    pub pci_dss: PciDssPolicy,
}

impl Compliance {
    /// `(label, enabled)` for every framework in declared order.
    pub fn frameworks(&self) -> [(&'static str, bool); 4] {
        [
            ("HIPAA", self.hipaa.enabled),
            ("GDPR", self.gdpr.enabled),
            ("SOX", self.sox.enabled),
            ("PCIDSS", self.pci_dss.enabled),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HipaaPolicy {
    pub enabled: bool,
    pub baa_required: bool,
    pub audit_retention_years: u32,
    pub encryption_required: bool,
}

impl Default for HipaaPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            baa_required: true,
            audit_retention_years: 6,
            encryption_required: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GdprPolicy {
    pub enabled: bool,
    pub data_retention_days: u32,
    pub right_to_be_forgotten: bool,
    pub consent_required: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SoxPolicy {
    pub enabled: bool,
    pub financial_reporting_required: bool,
    pub control_testing_required: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PciDssPolicy {
    pub enabled: bool,
    /// Merchant level, 1 (highest volume) through 4.
    pub level: u8,
    pub quarterly_scans: bool,
}

impl Default for PciDssPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            level: 4,
            quarterly_scans: false,
        }
    }
}
