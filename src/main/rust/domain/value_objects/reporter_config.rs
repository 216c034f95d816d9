use std::time::Duration;

/// Fallback used whenever a configured period is not strictly positive
pub const DEFAULT_INTERVAL_SECS: u64 = 120;

/// Timing configuration for the reporter
///
/// Both periods are always strictly positive. Invalid input is replaced by
/// [`DEFAULT_INTERVAL_SECS`] and logged, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReporterConfig {
    retry_after_secs: u64,
    update_interval_secs: u64,
}

impl ReporterConfig {
    pub fn new(retry_after_secs: i64, update_interval_secs: i64) -> Self {
        Self {
            retry_after_secs: coerce_period(retry_after_secs, "retry_after"),
            update_interval_secs: coerce_period(update_interval_secs, "update_interval"),
        }
    }

    /// Build from periods that were already coerced
    pub(crate) fn from_secs(retry_after_secs: u64, update_interval_secs: u64) -> Self {
        Self {
            retry_after_secs: retry_after_secs.max(1),
            update_interval_secs: update_interval_secs.max(1),
        }
    }

    pub fn retry_after(&self) -> Duration {
        Duration::from_secs(self.retry_after_secs)
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_secs)
    }

    pub fn retry_after_secs(&self) -> u64 {
        self.retry_after_secs
    }

    pub fn update_interval_secs(&self) -> u64 {
        self.update_interval_secs
    }

    pub fn with_retry_after(self, secs: i64) -> Self {
        Self {
            retry_after_secs: coerce_period(secs, "retry_after"),
            ..self
        }
    }

    pub fn with_update_interval(self, secs: i64) -> Self {
        Self {
            update_interval_secs: coerce_period(secs, "update_interval"),
            ..self
        }
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            retry_after_secs: DEFAULT_INTERVAL_SECS,
            update_interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

/// Map a raw period onto a strictly positive number of seconds.
pub fn coerce_period(secs: i64, name: &str) -> u64 {
    if secs <= 0 {
        tracing::error!(
            parameter = name,
            value = secs,
            "{} must be a positive number of seconds, reset to {}",
            name,
            DEFAULT_INTERVAL_SECS
        );
        return DEFAULT_INTERVAL_SECS;
    }
    secs as u64
}
