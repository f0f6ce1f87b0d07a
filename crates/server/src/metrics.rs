//! Prometheus metrics recorder and request instrumentation

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Requests received (counter, labels: endpoint)
pub const REQUESTS_TOTAL: &str = "transliterate_requests_total";
/// Requests answered with 500 (counter, labels: endpoint, kind)
pub const ERRORS_TOTAL: &str = "transliterate_errors_total";
/// Handler latency (histogram, labels: endpoint)
pub const DURATION_SECONDS: &str = "transliterate_duration_seconds";

/// Install the global Prometheus recorder.
///
/// Call once at startup, before any metric is recorded.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    tracing::info!("Prometheus metrics recorder installed");
    Ok(handle)
}

pub fn record_request(endpoint: &'static str) {
    ::metrics::counter!(REQUESTS_TOTAL, "endpoint" => endpoint).increment(1);
}

pub fn record_error(endpoint: &'static str, kind: &'static str) {
    ::metrics::counter!(ERRORS_TOTAL, "endpoint" => endpoint, "kind" => kind).increment(1);
}

pub fn record_duration(endpoint: &'static str, elapsed: Duration) {
    ::metrics::histogram!(DURATION_SECONDS, "endpoint" => endpoint).record(elapsed.as_secs_f64());
}
