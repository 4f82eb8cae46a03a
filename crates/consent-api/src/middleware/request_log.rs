use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Emits one `api_request` event per call, keyed by the route template
/// (`/possum/catalogs/{kind}`) rather than the raw path. Requests that
/// match no route are logged as `unmatched`. Server errors log at WARN.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let started = Instant::now();

    let response = next.run(req).await;

    let latency_ms = started.elapsed().as_millis() as u64;
    let status = response.status();
    if status.is_server_error() {
        tracing::warn!(%method, %route, status = status.as_u16(), latency_ms, "api_request");
    } else {
        tracing::info!(%method, %route, status = status.as_u16(), latency_ms, "api_request");
    }

    response
}
