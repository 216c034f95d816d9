mod delivery_outcome;
mod endpoint;
mod reporter_config;
mod stats_snapshot;
mod status_class;

pub use delivery_outcome::DeliveryOutcome;
pub use endpoint::{Endpoint, DEFAULT_BASE_URL};
pub use reporter_config::{coerce_period, ReporterConfig, DEFAULT_INTERVAL_SECS};
pub use stats_snapshot::StatsSnapshot;
pub use status_class::StatusClass;
