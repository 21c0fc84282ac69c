//! Metrics collection and exposition.
//!
//! # Metrics
//! - `recipes_requests_total` (counter): requests by method, status
//! - `recipes_request_duration_seconds` (histogram): latency distribution
//! - `recipes_created_total` (counter): successful creations
//! - `recipes_store_errors_total` (counter): store failures by operation

use std::net::SocketAddr;
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed HTTP request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!(
        "recipes_requests_total",
        "method" => method.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "recipes_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_recipe_created() {
    metrics::counter!("recipes_created_total").increment(1);
}

pub fn record_store_error(op: &'static str) {
    metrics::counter!("recipes_store_errors_total", "op" => op).increment(1);
}

/// Middleware recording every request that passes through the router.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();

    let response = next.run(request).await;

    record_request(method.as_str(), response.status().as_u16(), start);
    response
}
