use std::time::Duration;

use tokio::time::Instant;

/// Minimum spacing between two outbound requests, independent of the tick interval
pub const MIN_REQUEST_SPACING: Duration = Duration::from_secs(30);

/// Verdict of the rate guard for a send attempted at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateGuard {
    Clear,
    Wait(Duration),
}

/// Domain entity tracking successful deliveries
#[derive(Debug, Default)]
pub struct RequestLedger {
    last_success: Option<Instant>,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure business rule: may a request go out at `now`?
    pub fn check(&self, now: Instant) -> RateGuard {
        match self.elapsed(now) {
            Some(elapsed) if elapsed < MIN_REQUEST_SPACING => {
                RateGuard::Wait(MIN_REQUEST_SPACING - elapsed)
            }
            _ => RateGuard::Clear,
        }
    }

    pub fn record_success(&mut self, now: Instant) {
        self.last_success = Some(now);
    }

    /// Time since the last successful delivery, `None` if there never was one
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.last_success
            .map(|last| now.saturating_duration_since(last))
    }

    pub fn describe_elapsed(&self, now: Instant) -> String {
        match self.elapsed(now) {
            Some(elapsed) => format_elapsed(elapsed),
            None => "never".to_string(),
        }
    }
}

/// Render a duration as whole minutes and seconds
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{} minutes {} seconds", total / 60, total % 60)
}
