//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, path, status
//! - `http_request_duration_ms` (histogram): latency distribution
//!
//! # Design Decisions
//! - The exporter runs on its own listener so scrapes never contend with
//!   inference traffic
//! - Recording is cheap and infallible; an uninstalled recorder is a no-op
//! - The path label is bounded: known routes keep their name, everything
//!   else shares one "unmatched" bucket so arbitrary URLs cannot grow the
//!   registry

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Routes the service actually serves; all label values come from here.
const KNOWN_ROUTES: [&str; 3] = ["/live_check", "/ready_check", "/predict"];

/// Collapse a raw request path into a bounded label value.
pub fn route_label(path: &str) -> &'static str {
    KNOWN_ROUTES
        .iter()
        .find(|route| **route == path)
        .copied()
        .unwrap_or("unmatched")
}

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::error!(error = %e, "Failed to install metrics exporter");
    } else {
        tracing::info!(address = %addr, "Metrics exporter listening");
    }
}

/// Record one completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let path = route_label(path);
    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "path" => path,
        "status" => status.to_string(),
    )
    .increment(1);
    metrics::histogram!(
        "http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path,
        "status" => status.to_string(),
    )
    .record(start.elapsed().as_secs_f64() * 1000.0);
}
