use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::application::services::DeliveryService;
use crate::domain::ports::{MetricsReporter, StatsSource, StatsTransport};
use crate::domain::value_objects::{coerce_period, DeliveryOutcome, Endpoint, ReporterConfig};

/// Handle to the spawned update loop
struct UpdateLoop {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

/// Background reporter publishing bot statistics on a fixed interval
///
/// `activate` and `stop` take `&mut self`, so the owner can never race them
/// against each other.
pub struct ReporterService {
    delivery: Arc<DeliveryService>,
    metrics: Arc<dyn MetricsReporter>,
    update_interval_secs: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
    update_loop: Option<UpdateLoop>,
}

impl ReporterService {
    pub fn new(
        source: Arc<dyn StatsSource>,
        transport: Arc<dyn StatsTransport>,
        endpoint: Endpoint,
        metrics: Arc<dyn MetricsReporter>,
        config: ReporterConfig,
    ) -> Self {
        let delivery = Arc::new(DeliveryService::new(
            source,
            transport,
            endpoint,
            metrics.clone(),
            config.retry_after(),
        ));

        Self {
            delivery,
            metrics,
            update_interval_secs: Arc::new(AtomicU64::new(config.update_interval_secs())),
            running: Arc::new(AtomicBool::new(false)),
            update_loop: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> ReporterConfig {
        ReporterConfig::from_secs(
            self.delivery.retry_after().as_secs(),
            self.update_interval_secs.load(Ordering::SeqCst),
        )
    }

    /// Start the update loop; no-op if it is already running
    ///
    /// The first snapshot is sent immediately, then one per interval.
    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self, update_interval: Option<i64>) {
        if self.is_running() {
            tracing::debug!("Reporter already running, ignoring activate");
            return;
        }

        if let Some(secs) = update_interval {
            self.set_update_interval(secs);
        }

        self.running.store(true, Ordering::SeqCst);
        self.metrics.report_running(true);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(run_update_loop(
            self.delivery.clone(),
            self.update_interval_secs.clone(),
            self.running.clone(),
            shutdown_rx,
        ));
        self.update_loop = Some(UpdateLoop {
            shutdown: shutdown_tx,
            task,
        });

        tracing::info!(
            update_interval_secs = self.update_interval_secs.load(Ordering::SeqCst),
            retry_after_secs = self.delivery.retry_after().as_secs(),
            "Stats update task started"
        );
    }

    /// Stop the update loop and wait for it to exit
    ///
    /// A sleeping loop is woken immediately. An in-flight send or 429 back-off
    /// finishes first, then the loop exits without retrying or rescheduling.
    pub async fn stop(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }

        if let Some(update_loop) = self.update_loop.take() {
            let _ = update_loop.shutdown.send(());
            match update_loop.task.await {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => {}
                Err(e) => tracing::error!("Stats update task ended abnormally: {}", e),
            }
        }

        self.metrics.report_running(false);
        tracing::info!("Stats update task stopped");
    }

    /// Takes effect on the next scheduling decision
    pub fn set_update_interval(&self, secs: i64) {
        let secs = coerce_period(secs, "update_interval");
        self.update_interval_secs.store(secs, Ordering::SeqCst);
    }

    /// Takes effect on the next 429 back-off
    pub fn set_retry_after(&self, secs: i64) {
        self.delivery.set_retry_after(secs);
    }

    /// Send a snapshot now, outside the schedule, subject to the rate guard
    pub async fn update_now(&self) -> DeliveryOutcome {
        self.delivery.send_snapshot().await
    }

    pub fn elapsed_since_last_update(&self) -> Option<Duration> {
        self.delivery.elapsed_since_last_update()
    }

    /// "{m} minutes {s} seconds" since the last success, or "never"
    pub fn time_since_last_update(&self) -> String {
        self.delivery.time_since_last_update()
    }
}

impl Drop for ReporterService {
    fn drop(&mut self) {
        if let Some(update_loop) = self.update_loop.take() {
            tracing::warn!("Reporter dropped while running, signalling update task to exit");
            self.running.store(false, Ordering::SeqCst);
            let _ = update_loop.shutdown.send(());
        }
    }
}

async fn run_update_loop(
    delivery: Arc<DeliveryService>,
    update_interval_secs: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
    mut shutdown: oneshot::Receiver<()>,
) {
    while running.load(Ordering::SeqCst) {
        delivery.send_scheduled(&running).await;

        if !running.load(Ordering::SeqCst) {
            break;
        }

        let interval = Duration::from_secs(update_interval_secs.load(Ordering::SeqCst));
        tokio::select! {
            _ = &mut shutdown => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    tracing::debug!("Stats update loop exited");
}
