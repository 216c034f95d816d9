mod metrics_reporter;
mod stats_source;
mod stats_transport;

pub use metrics_reporter::MetricsReporter;
pub use stats_source::StatsSource;
pub use stats_transport::StatsTransport;
