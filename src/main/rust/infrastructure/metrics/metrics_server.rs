use std::future::Future;

use warp::Filter;

use super::PrometheusReporter;

/// Health check response structure
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Serve `/metrics` and `/health` until `shutdown` resolves
pub async fn serve_metrics(port: u16, shutdown: impl Future<Output = ()> + Send + 'static) {
    let metrics_route = warp::path("metrics").map(|| {
        let body = PrometheusReporter::gather_metrics();
        warp::reply::with_header(body, "content-type", "text/plain; version=0.0.4; charset=utf-8")
    });

    let health_route = warp::path("health").map(|| {
        let response = HealthResponse {
            status: "healthy",
            service: "mircord-reporter",
            version: env!("CARGO_PKG_VERSION"),
        };
        warp::reply::json(&response)
    });

    let routes = metrics_route.or(health_route);

    let (addr, server) =
        warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], port), shutdown);

    tracing::info!("Metrics server listening on http://{}", addr);
    server.await;
}
