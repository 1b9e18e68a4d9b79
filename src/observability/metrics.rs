//! Metrics collection and exposition.
//!
//! # Metrics
//! - `rover_requests_total` (counter): requests by method, status
//! - `rover_request_duration_seconds` (histogram): latency by method
//! - `rover_commands_applied_total` (counter): rover commands applied

use axum::http::Method;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus exporter on `addr`.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Label for `method`; anything outside the standard set is `"OTHER"`
/// so clients cannot mint new series.
pub fn method_label(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::DELETE => "DELETE",
        Method::HEAD => "HEAD",
        Method::OPTIONS => "OPTIONS",
        Method::PATCH => "PATCH",
        Method::CONNECT => "CONNECT",
        Method::TRACE => "TRACE",
        _ => "OTHER",
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "rover_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("rover_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_commands(applied: usize) {
    metrics::counter!("rover_commands_applied_total").increment(applied as u64);
}
