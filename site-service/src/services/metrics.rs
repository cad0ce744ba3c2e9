//! Metrics collection for site-service.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Call once, from `main`.
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// A content read that was answered from the built-in defaults.
pub fn record_content_fallback(kind: &'static str, reason: &'static str) {
    counter!("content_fallback_total", "kind" => kind, "reason" => reason).increment(1);
}

pub fn record_contact_submission(outcome: &'static str) {
    counter!("contact_submissions_total", "outcome" => outcome).increment(1);
}
