//! Metrics collection and exposition.
//!
//! # Metrics
//! - `guide_page_views_total` (counter): pages served, by view
//! - `guide_route_misses_total` (counter): requests no route matched
//! - `guide_request_duration_seconds` (histogram): latency, by status
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed, so handlers and
//!   tests never need to care whether metrics are on
//! - Prometheus exporter runs on its own listener, off by default

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::View;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_page_view(view: View) {
    metrics::counter!("guide_page_views_total", "view" => view.id()).increment(1);
}

pub fn record_route_miss() {
    metrics::counter!("guide_route_misses_total").increment(1);
}

pub fn record_request(status: u16, start: Instant) {
    metrics::histogram!("guide_request_duration_seconds", "status" => status.to_string())
        .record(start.elapsed().as_secs_f64());
}
