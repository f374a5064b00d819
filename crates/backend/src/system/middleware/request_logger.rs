use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_thousands;

/// Logs latency, response size, status, method and path of every request.
/// The response body is buffered to measure its size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();
    let status = parts.status.as_u16();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{:>5}ms | {:>12} | {} {:>6} {} ({})",
                start.elapsed().as_millis(),
                "error",
                status,
                method,
                path,
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = format_thousands(bytes.len() as i64);
    let elapsed = start.elapsed().as_millis();
    if parts.status.is_success() {
        tracing::info!("{:>5}ms | {:>12} | {} {:>6} {}", elapsed, size, status, method, path);
    } else {
        tracing::warn!("{:>5}ms | {:>12} | {} {:>6} {}", elapsed, size, status, method, path);
    }

    Response::from_parts(parts, Body::from(bytes))
}
