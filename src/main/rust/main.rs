use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::oneshot;
use tracing::info;

use mircord_reporter::{
    init_logging, serve_metrics, Config, PrometheusReporter, ReporterService, ReqwestTransport,
    StaticStatsSource,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();
    config.validate()?;

    init_logging(config.verbose);

    // Initialize metrics
    PrometheusReporter::init_metrics()?;

    info!("Starting Mircord stats reporter");
    info!("  Collector: {}", config.base_url);
    info!("  Metrics port: {}", config.metrics_port);

    // Convert CLI config to domain configs
    let endpoint = config.to_endpoint().map_err(|e| anyhow::anyhow!("{}", e))?;
    let reporter_config = config.to_reporter_config();

    // Create infrastructure implementations (dependency injection)
    let transport = Arc::new(
        ReqwestTransport::new(config.request_timeout()).map_err(|e| anyhow::anyhow!("{}", e))?,
    );
    let source = Arc::new(StaticStatsSource::new(config.servers, config.shards));
    let metrics_reporter = Arc::new(PrometheusReporter::new());

    let mut reporter =
        ReporterService::new(source, transport, endpoint, metrics_reporter, reporter_config);

    // Start metrics server
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let metrics_server = tokio::spawn(serve_metrics(config.metrics_port, async move {
        shutdown_rx.await.ok();
    }));

    reporter.activate(None);

    tokio::signal::ctrl_c().await?;
    info!("Received shutdown signal");

    reporter.stop().await;
    info!("Time since last successful update: {}", reporter.time_since_last_update());

    // Signal shutdown to metrics server
    let _ = shutdown_tx.send(());
    metrics_server.await?;

    info!("Reporter shutdown complete");
    Ok(())
}
