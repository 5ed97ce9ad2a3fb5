//! Pricing reference data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Pricing {
    pub base_plan: Plan,
    pub add_ons: Vec<AddOn>,
    pub customization: CustomWorkRates,
    pub billing: BillingTerms,
    /// Monthly charge per configured location.
    pub per_location_monthly: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Plan {
    pub name: String,
    pub monthly_price: f64,
    pub annual_price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AddOn {
    pub name: String,
    pub monthly_price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomWorkRates {
    pub hourly_rate: f64,
    pub setup_fee: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BillingTerms {
    pub cycle: BillingCycle,
    pub payment_terms_days: u32,
    pub currency: String,
}

impl Default for BillingTerms {
    fn default() -> Self {
        Self {
            cycle: BillingCycle::Monthly,
            payment_terms_days: 30,
            currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}
