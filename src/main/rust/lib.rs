pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

// Re-exports for convenience
pub use application::services::{DeliveryService, ReporterService};
pub use config::Config;
pub use domain::entities::{RateGuard, RequestLedger, MIN_REQUEST_SPACING};
pub use domain::errors::{DomainError, Result};
pub use domain::ports::{MetricsReporter, StatsSource, StatsTransport};
pub use domain::value_objects::{
    DeliveryOutcome, Endpoint, ReporterConfig, StatsSnapshot, StatusClass, DEFAULT_BASE_URL,
    DEFAULT_INTERVAL_SECS,
};
pub use infrastructure::host::StaticStatsSource;
pub use infrastructure::http::ReqwestTransport;
pub use infrastructure::metrics::{serve_metrics, PrometheusReporter};
pub use telemetry::init_logging;
