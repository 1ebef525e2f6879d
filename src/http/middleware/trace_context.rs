//! Trace id propagation middleware.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::trace::{TraceId, X_TRACE_ID};

/// Attach a request-scoped trace id: inherit a well-formed `x-trace-id`
/// header or mint a new one, expose it to handlers via request extensions,
/// and echo it on the response so callers can correlate with server logs.
pub async fn propagate_trace_id(mut request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(X_TRACE_ID)
        .and_then(|value| value.to_str().ok())
        .and_then(TraceId::parse)
        .unwrap_or_else(TraceId::generate);

    request.extensions_mut().insert(trace_id.clone());

    let mut response = next.run(request).await;

    if let Ok(header) = HeaderValue::from_str(trace_id.as_str()) {
        response.headers_mut().insert(X_TRACE_ID, header);
    }
    response
}
