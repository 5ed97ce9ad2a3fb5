//! Operational summaries: pricing, location opening state, customer listing.

use chrono::{DateTime, Datelike, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::model::{CustomerConfig, Environment, IndustryType, Location};
use crate::registry::views::DerivedViewBuilder;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    pub monthly_total: f64,
    pub base_cost: f64,
    pub location_cost: f64,
    pub add_on_cost: f64,
    pub location_count: usize,
    pub annual_total: f64,
    pub currency: String,
}

impl Default for PricingSummary {
    fn default() -> Self {
        Self {
            monthly_total: 0.0,
            base_cost: 0.0,
            location_cost: 0.0,
            add_on_cost: 0.0,
            location_count: 0,
            annual_total: 0.0,
            currency: "USD".to_string(),
        }
    }
}

impl PricingSummary {
    pub fn for_config(config: &CustomerConfig) -> Self {
        let pricing = &config.pricing;
        let location_count = config.locations.len();
        let base_cost = pricing.base_plan.monthly_price;
        let location_cost = pricing.per_location_monthly * location_count as f64;
        let add_on_cost: f64 = pricing.add_ons.iter().map(|a| a.monthly_price).sum();
        let monthly_total = base_cost + location_cost + add_on_cost;

        Self {
            monthly_total,
            base_cost,
            location_cost,
            add_on_cost,
            location_count,
            annual_total: monthly_total * 12.0,
            currency: pricing.billing.currency.clone(),
        }
    }
}

/// Whether `location` is open at instant `at`, in the location's timezone.
///
/// Inactive locations are closed. No hours configured means always open; a
/// weekday without an entry means closed. Unparseable times count as open.
pub fn is_open_at(location: &Location, at: DateTime<Utc>) -> bool {
    if !location.is_active {
        return false;
    }
    let Some(hours) = &location.business_hours else {
        return true;
    };

    let tz: Tz = location.timezone.parse().unwrap_or(Tz::UTC);
    let local = at.with_timezone(&tz);

    let Some(day) = hours.for_day(local.weekday()) else {
        return false;
    };
    if day.closed {
        return false;
    }

    match (parse_hhmm(&day.open), parse_hhmm(&day.close)) {
        (Some(open), Some(close)) => {
            let now = local.time();
            open <= now && now <= close
        }
        _ => {
            tracing::debug!(
                location_id = %location.id,
                open = %day.open,
                close = %day.close,
                "Unparseable business hours; treating as open"
            );
            true
        }
    }
}

fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStatus {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub is_open_now: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationsSummary {
    pub total: usize,
    pub active: usize,
    pub open_now: usize,
    pub locations: Vec<LocationStatus>,
}

impl LocationsSummary {
    pub fn for_config(config: &CustomerConfig, at: DateTime<Utc>) -> Self {
        let locations: Vec<LocationStatus> = config
            .locations
            .iter()
            .map(|loc| LocationStatus {
                id: loc.id.clone(),
                name: loc.name.clone(),
                is_active: loc.is_active,
                is_open_now: is_open_at(loc, at),
            })
            .collect();

        Self {
            total: locations.len(),
            active: locations.iter().filter(|l| l.is_active).count(),
            open_now: locations.iter().filter(|l| l.is_open_now).count(),
            locations,
        }
    }
}

/// One row of the platform customer listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub customer_id: String,
    pub customer_name: String,
    pub industry_type: Option<IndustryType>,
    pub environment: Environment,
    pub location_count: usize,
    pub monthly_total: f64,
    pub compliance_frameworks: Vec<&'static str>,
    /// At least one tenant is active.
    pub active: bool,
}

impl CustomerSummary {
    pub fn for_config(config: &CustomerConfig) -> Self {
        Self {
            customer_id: config.customer_id.clone(),
            customer_name: config.customer_name.clone(),
            industry_type: config.industry_type,
            environment: config.environment,
            location_count: config.locations.len(),
            monthly_total: PricingSummary::for_config(config).monthly_total,
            compliance_frameworks: DerivedViewBuilder::new(config).compliance_frameworks(),
            active: config.tenants.iter().any(|t| t.is_active),
        }
    }
}

/// Static platform capabilities plus registry size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfo {
    pub version: &'static str,
    pub supported_industries: Vec<IndustryType>,
    pub compliance_frameworks: Vec<&'static str>,
    pub customer_count: usize,
}
