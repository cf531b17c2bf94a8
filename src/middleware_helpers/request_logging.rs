use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs one line when a request arrives and one when it completes.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    tracing::debug!(method = %method, uri = %uri, "Incoming request");

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(method = %method, uri = %uri, status = status.as_u16(), elapsed_ms, "Request failed");
    } else {
        tracing::info!(method = %method, uri = %uri, status = status.as_u16(), elapsed_ms, "Request completed");
    }
    metrics::histogram!("webshop.http.request_ms", elapsed_ms as f64);

    response
}
