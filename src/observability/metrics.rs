//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_cache_lookups_total{result}`: cache hits/misses in the site store
//! - `site_override_loads_total{outcome}`: customer override load attempts
//! - `contact_submissions_total{outcome}`: contact-form submission results

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Prometheus exporter listening"),
        Err(e) => tracing::error!(error = %e, "failed to install Prometheus exporter"),
    }
}

/// Record a site-data cache lookup (`"hit"` or `"miss"`).
pub fn record_cache_lookup(result: &'static str) {
    counter!("site_cache_lookups_total", "result" => result).increment(1);
}

/// Record a customer override load attempt (`"ok"` or `"error"`).
pub fn record_override_load(outcome: &'static str) {
    counter!("site_override_loads_total", "outcome" => outcome).increment(1);
}

/// Record a contact submission outcome.
pub fn record_contact_submission(outcome: &'static str) {
    counter!("contact_submissions_total", "outcome" => outcome).increment(1);
}
