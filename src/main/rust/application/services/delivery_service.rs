use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::domain::entities::{RateGuard, RequestLedger};
use crate::domain::ports::{MetricsReporter, StatsSource, StatsTransport};
use crate::domain::value_objects::{coerce_period, DeliveryOutcome, Endpoint, StatusClass};

/// Application service delivering snapshots to the collector
///
/// One call to [`DeliveryService::send_snapshot`] is one tick's worth of
/// work: rate guard, a POST, and back-off retries while the collector keeps
/// answering 429.
pub struct DeliveryService {
    source: Arc<dyn StatsSource>,
    transport: Arc<dyn StatsTransport>,
    endpoint: Endpoint,
    metrics: Arc<dyn MetricsReporter>,
    retry_after_secs: AtomicU64,
    ledger: Mutex<RequestLedger>,
}

impl DeliveryService {
    pub fn new(
        source: Arc<dyn StatsSource>,
        transport: Arc<dyn StatsTransport>,
        endpoint: Endpoint,
        metrics: Arc<dyn MetricsReporter>,
        retry_after: Duration,
    ) -> Self {
        Self {
            source,
            transport,
            endpoint,
            metrics,
            retry_after_secs: AtomicU64::new(retry_after.as_secs()),
            ledger: Mutex::new(RequestLedger::new()),
        }
    }

    pub fn retry_after(&self) -> Duration {
        Duration::from_secs(self.retry_after_secs.load(Ordering::SeqCst))
    }

    /// Takes effect on the next back-off, not on one already sleeping
    pub fn set_retry_after(&self, secs: i64) {
        let secs = coerce_period(secs, "retry_after");
        self.retry_after_secs.store(secs, Ordering::SeqCst);
    }

    pub fn elapsed_since_last_update(&self) -> Option<Duration> {
        self.ledger().elapsed(Instant::now())
    }

    pub fn time_since_last_update(&self) -> String {
        self.ledger().describe_elapsed(Instant::now())
    }

    /// Deliver one snapshot, retrying with a fixed back-off while throttled
    pub async fn send_snapshot(&self) -> DeliveryOutcome {
        self.deliver(|| true).await
    }

    /// Same as [`DeliveryService::send_snapshot`], but gives up on throttle
    /// retries once `running` is cleared
    ///
    /// A back-off already sleeping runs to completion; the flag is checked
    /// before the next attempt.
    pub async fn send_scheduled(&self, running: &AtomicBool) -> DeliveryOutcome {
        self.deliver(|| running.load(Ordering::SeqCst)).await
    }

    async fn deliver(&self, keep_retrying: impl Fn() -> bool) -> DeliveryOutcome {
        loop {
            let status = match self.attempt().await {
                Attempt::Finished(outcome) => return outcome,
                Attempt::Failed(status) => status,
            };

            let class = self.handle_error(status);
            if !class.is_throttled() {
                return DeliveryOutcome::Rejected(class);
            }

            let backoff = self.retry_after();
            self.metrics.report_throttle_retry(backoff.as_secs_f64());
            tracing::info!(
                retry_after_secs = backoff.as_secs(),
                "Throttled by collector, retrying in {:?}",
                backoff
            );
            tokio::time::sleep(backoff).await;

            if !keep_retrying() {
                tracing::info!("Reporter stopped during back-off, abandoning retry");
                return DeliveryOutcome::Abandoned;
            }
        }
    }

    /// Log a non-200 status with its cause and return its classification
    pub fn handle_error(&self, status: u16) -> StatusClass {
        let class = StatusClass::from_code(status);
        if class.is_server_side() {
            tracing::warn!(status = class.code(), "Failed to send stats: code {}", class);
        } else {
            tracing::error!(status = class.code(), "Failed to send stats: code {}", class);
        }
        if !class.is_throttled() {
            self.metrics.report_rejected(&class);
        }
        class
    }

    async fn attempt(&self) -> Attempt {
        let verdict = self.ledger().check(Instant::now());
        if let RateGuard::Wait(remaining) = verdict {
            tracing::warn!(
                remaining_secs = remaining.as_secs_f64(),
                "Request limit exceeded. Wait {:.2} seconds.",
                remaining.as_secs_f64()
            );
            self.metrics.report_skipped();
            return Attempt::Finished(DeliveryOutcome::Skipped { remaining });
        }

        let snapshot = self.source.snapshot();
        tracing::debug!(
            servers = snapshot.servers,
            shards = snapshot.shards,
            "Posting stats to {}",
            self.endpoint.base_url()
        );

        match self.transport.post_snapshot(&self.endpoint, &snapshot).await {
            Ok(200) => {
                self.ledger().record_success(Instant::now());
                self.metrics.report_delivered();
                tracing::info!(
                    servers = snapshot.servers,
                    shards = snapshot.shards,
                    "Stats updated successfully"
                );
                Attempt::Finished(DeliveryOutcome::Delivered)
            }
            Ok(status) => Attempt::Failed(status),
            Err(e) => {
                tracing::error!("Error while sending request: {}", e);
                self.metrics.report_transport_failure();
                Attempt::Finished(DeliveryOutcome::TransportFailed)
            }
        }
    }

    fn ledger(&self) -> MutexGuard<'_, RequestLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

enum Attempt {
    Finished(DeliveryOutcome),
    Failed(u16),
}
