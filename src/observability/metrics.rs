//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define registry metrics (registrations, lookups, HTTP latency)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `registry_registrations_total` (counter): admissions by outcome
//! - `registry_validation_warnings_total` (counter): advisory warnings at startup
//! - `registry_customers` (gauge): admitted customer count
//! - `registry_lookups_total` (counter): lookups by operation and result
//! - `registry_http_request_duration_seconds` (histogram): handler latency
//!
//! # Design Decisions
//! - Without an installed recorder every call is a no-op
//! - Route labels use the matched route template, never the raw path

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Outcome is one of "admitted", "replaced", "rejected", "skipped".
pub fn record_registration(outcome: &'static str) {
    counter!("registry_registrations_total", "outcome" => outcome).increment(1);
}

pub fn record_validation_warnings(count: usize) {
    counter!("registry_validation_warnings_total").increment(count as u64);
}

pub fn record_customer_count(count: usize) {
    gauge!("registry_customers").set(count as f64);
}

pub fn record_lookup(operation: &'static str, hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    counter!("registry_lookups_total", "operation" => operation, "result" => result).increment(1);
}

pub fn record_request(route: String, status: u16, start: Instant) {
    histogram!(
        "registry_http_request_duration_seconds",
        "route" => route,
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
