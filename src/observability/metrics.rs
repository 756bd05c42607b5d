//! Metrics collection and exposition.
//!
//! # Metrics
//! - `intake_submissions_total` (counter): submissions by outcome
//! - `intake_rate_limited_total` (counter): rejected admission attempts
//! - `capture_warnings_total` (counter): persistence warnings by kind
//!
//! # Design Decisions
//! - Outcome labels are static strings so recording stays allocation-free
//! - The Prometheus exporter is optional; counters no-op without it

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr` and register metric metadata.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint started");
        }
        Err(e) => {
            tracing::error!(error = %e, address = %addr, "Failed to start metrics endpoint");
            return;
        }
    }

    describe_counter!(
        "intake_submissions_total",
        "Submissions processed, labeled by outcome"
    );
    describe_counter!(
        "intake_rate_limited_total",
        "Submission attempts rejected by the rate limiter"
    );
    describe_counter!(
        "capture_warnings_total",
        "Capture log warnings, labeled by kind"
    );
}

/// Record one processed submission with its terminal outcome.
pub fn record_submission(outcome: &'static str) {
    counter!("intake_submissions_total", "outcome" => outcome).increment(1);
}

/// Record one rate-limited submission attempt.
pub fn record_rate_limited() {
    counter!("intake_rate_limited_total").increment(1);
}

/// Record a non-fatal capture problem ("append" or "permissions").
pub fn record_capture_warning(kind: &'static str) {
    counter!("capture_warnings_total", "kind" => kind).increment(1);
}
