//! Registry read handlers.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::http::middleware::CustomerContext;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::model::{CustomerConfig, Environment, IntegrationSettings, Tenant};
use crate::observability::metrics;
use crate::registry::{
    CustomerSummary, LocationsSummary, PlatformInfo, PricingSummary, ValidationResult,
};

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub customers: usize,
}

#[derive(Serialize)]
pub struct CustomerList {
    pub customers: Vec<CustomerSummary>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentView {
    pub customer_id: String,
    pub environment: Environment,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub domain: Option<String>,
}

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        customers: state.registry.store().len(),
    })
}

pub async fn platform_info(State(state): State<AppState>) -> Json<PlatformInfo> {
    Json(state.registry.platform_info())
}

pub async fn list_customers(State(state): State<AppState>) -> Json<CustomerList> {
    let customers = state.registry.customer_summaries();
    Json(CustomerList {
        total: customers.len(),
        customers,
    })
}

/// Resolve a customer from `?domain=`, falling back to the Host header.
pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
    headers: HeaderMap,
) -> ApiResult<CustomerConfig> {
    let domain = match query.domain {
        Some(domain) => domain,
        None => headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .map(normalize_host)
            .ok_or_else(|| ApiError::BadRequest("No domain or Host header supplied".into()))?,
    };

    let found = state.registry.customer_by_domain(&domain);
    metrics::record_lookup("by_domain", found.is_some());
    found
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No customer matches domain: {}", domain)))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> ApiResult<CustomerConfig> {
    require_customer(&state, &customer_id).map(|c| Json(c.clone()))
}

pub async fn get_branding(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> ApiResult<BTreeMap<String, String>> {
    require_customer(&state, &customer_id)?;
    Ok(Json(state.registry.branding_vars(&customer_id)))
}

pub async fn get_compliance(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> ApiResult<Vec<&'static str>> {
    require_customer(&state, &customer_id)?;
    Ok(Json(state.registry.compliance_frameworks(&customer_id)))
}

/// Unknown customers report the default environment rather than 404.
pub async fn get_environment(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Json<EnvironmentView> {
    let environment = state.registry.environment(&customer_id);
    Json(EnvironmentView {
        customer_id,
        environment,
    })
}

pub async fn get_pricing(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> ApiResult<PricingSummary> {
    require_customer(&state, &customer_id)?;
    Ok(Json(state.registry.pricing_summary(&customer_id)))
}

pub async fn get_locations(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> ApiResult<LocationsSummary> {
    require_customer(&state, &customer_id)?;
    Ok(Json(
        state
            .registry
            .locations_summary(&customer_id, chrono::Utc::now()),
    ))
}

pub async fn get_validation(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Json<ValidationResult> {
    Json(state.registry.validate_registered(&customer_id))
}

pub async fn get_tenant(
    State(state): State<AppState>,
    Path((customer_id, subdomain)): Path<(String, String)>,
) -> ApiResult<Tenant> {
    require_customer(&state, &customer_id)?;
    let tenant = state.registry.tenant_by_subdomain(&customer_id, &subdomain);
    metrics::record_lookup("tenant_by_subdomain", tenant.is_some());
    tenant
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Tenant not found: {}", subdomain)))
}

pub async fn get_integration(
    State(state): State<AppState>,
    Path((customer_id, name)): Path<(String, String)>,
) -> ApiResult<IntegrationSettings> {
    require_customer(&state, &customer_id)?;
    let settings = state.registry.integration_config(&customer_id, &name);
    metrics::record_lookup("integration", settings.is_some());
    settings
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Integration not configured: {}", name)))
}

/// Configuration summary for the customer named in `X-Customer-ID`.
pub async fn scoped_config(
    State(state): State<AppState>,
    Extension(ctx): Extension<CustomerContext>,
) -> ApiResult<Value> {
    let config = require_customer(&state, &ctx.customer_id)?;
    Ok(Json(json!({
        "customerId": config.customer_id,
        "customerName": config.customer_name,
        "industryType": config.industry_type,
        "environment": config.environment,
        "complianceFrameworks": state.registry.compliance_frameworks(&ctx.customer_id),
        "branding": config.branding,
        "locations": config.locations.len(),
        "pricing": state.registry.pricing_summary(&ctx.customer_id),
    })))
}

pub async fn scoped_branding(
    State(state): State<AppState>,
    Extension(ctx): Extension<CustomerContext>,
) -> Json<BTreeMap<String, String>> {
    Json(state.registry.branding_vars(&ctx.customer_id))
}

fn require_customer<'a>(
    state: &'a AppState,
    customer_id: &str,
) -> Result<&'a CustomerConfig, ApiError> {
    let config = state.registry.customer_config(customer_id);
    metrics::record_lookup("customer_config", config.is_some());
    config.ok_or_else(|| ApiError::customer_not_found(customer_id))
}

/// Lowercase a Host header value and drop any port.
fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let without_port = match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    };
    without_port.to_ascii_lowercase()
}
