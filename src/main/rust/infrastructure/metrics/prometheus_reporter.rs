use std::time::{SystemTime, UNIX_EPOCH};

use lazy_static::lazy_static;
use prometheus::{Encoder, Gauge, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::domain::ports::MetricsReporter;
use crate::domain::value_objects::StatusClass;

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // Snapshots accepted by the collector
    pub static ref DELIVERIES: IntCounter = IntCounter::new(
        "mircord_deliveries_total",
        "Total number of snapshots delivered successfully"
    ).expect("metric can be created");

    // Sends refused by the 30 second spacing guard
    pub static ref SKIPPED: IntCounter = IntCounter::new(
        "mircord_skipped_total",
        "Total number of sends skipped by the rate guard"
    ).expect("metric can be created");

    pub static ref TRANSPORT_FAILURES: IntCounter = IntCounter::new(
        "mircord_transport_failures_total",
        "Total number of sends that failed before a response arrived"
    ).expect("metric can be created");

    // Non-retried responses, by status code
    pub static ref REJECTIONS: IntCounterVec = IntCounterVec::new(
        Opts::new(
            "mircord_rejections_total",
            "Total number of non-200 responses that were not retried"
        ),
        &["status"]
    ).expect("metric can be created");

    pub static ref THROTTLE_RETRIES: IntCounter = IntCounter::new(
        "mircord_throttle_retries_total",
        "Total number of retries after a 429 response"
    ).expect("metric can be created");

    // Back-off applied before the most recent throttle retry
    pub static ref BACKOFF_SECONDS: Gauge = Gauge::new(
        "mircord_throttle_backoff_seconds",
        "Current back-off delay before retrying a throttled update"
    ).expect("metric can be created");

    // Reporter loop state (0=stopped, 1=running)
    pub static ref RUNNING: IntGauge = IntGauge::new(
        "mircord_reporter_running",
        "Whether the update loop is running"
    ).expect("metric can be created");

    pub static ref LAST_DELIVERY: Gauge = Gauge::new(
        "mircord_last_delivery_timestamp_seconds",
        "Unix time of the last successful delivery"
    ).expect("metric can be created");
}

pub struct PrometheusReporter;

impl PrometheusReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn init_metrics() -> Result<(), prometheus::Error> {
        REGISTRY.register(Box::new(DELIVERIES.clone()))?;
        REGISTRY.register(Box::new(SKIPPED.clone()))?;
        REGISTRY.register(Box::new(TRANSPORT_FAILURES.clone()))?;
        REGISTRY.register(Box::new(REJECTIONS.clone()))?;
        REGISTRY.register(Box::new(THROTTLE_RETRIES.clone()))?;
        REGISTRY.register(Box::new(BACKOFF_SECONDS.clone()))?;
        REGISTRY.register(Box::new(RUNNING.clone()))?;
        REGISTRY.register(Box::new(LAST_DELIVERY.clone()))?;
        Ok(())
    }

    pub fn gather_metrics() -> Vec<u8> {
        let encoder = TextEncoder::new();
        let metric_families = REGISTRY.gather();
        let mut buffer = vec![];
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::error!("Failed to encode metrics: {}", e);
            return b"# Error encoding metrics\n".to_vec();
        }
        buffer
    }
}

impl Default for PrometheusReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsReporter for PrometheusReporter {
    fn report_delivered(&self) {
        DELIVERIES.inc();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();
        LAST_DELIVERY.set(now);
    }

    fn report_skipped(&self) {
        SKIPPED.inc();
    }

    fn report_transport_failure(&self) {
        TRANSPORT_FAILURES.inc();
    }

    fn report_rejected(&self, status: &StatusClass) {
        let code = status.code().to_string();
        REJECTIONS.with_label_values(&[code.as_str()]).inc();
    }

    fn report_throttle_retry(&self, backoff_secs: f64) {
        THROTTLE_RETRIES.inc();
        BACKOFF_SECONDS.set(backoff_secs);
    }

    fn report_running(&self, running: bool) {
        RUNNING.set(if running { 1 } else { 0 });
    }
}
