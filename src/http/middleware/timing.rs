//! Request timing middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::metrics;

/// Response header carrying wall-clock processing time in milliseconds,
/// rounded to 2 decimal places.
pub const X_PROCESS_TIME_MS: &str = "x-process-time-ms";

/// Stamp every response with its processing time. Sits outermost in the
/// stack so error and panic responses are timed too.
pub async fn process_time(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    if let Ok(header) = HeaderValue::from_str(&format!("{:.2}", elapsed_ms)) {
        response.headers_mut().insert(X_PROCESS_TIME_MS, header);
    }
    metrics::record_request(&method, &path, response.status().as_u16(), start);

    response
}
