use std::time::Duration;

use crate::domain::value_objects::StatusClass;

/// What a single call to the delivery engine ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Collector answered 200
    Delivered,
    /// Rate guard refused the send; no request was made
    Skipped { remaining: Duration },
    /// Connection, DNS or timeout failure
    TransportFailed,
    /// Collector answered with a non-retried status
    Rejected(StatusClass),
    /// Reporter was stopped while waiting out a 429
    Abandoned,
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}
