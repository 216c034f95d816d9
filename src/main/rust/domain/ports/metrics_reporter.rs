use crate::domain::value_objects::StatusClass;

/// Port for metrics reporting
pub trait MetricsReporter: Send + Sync {
    fn report_delivered(&self);
    fn report_skipped(&self);
    fn report_transport_failure(&self);
    fn report_rejected(&self, status: &StatusClass);
    fn report_throttle_retry(&self, backoff_secs: f64);
    fn report_running(&self, running: bool);
}
