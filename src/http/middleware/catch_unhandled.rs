//! Global error translation for failures that escape the handlers.

use std::panic::AssertUnwindSafe;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures_util::FutureExt;

use crate::error::ServiceError;
use crate::observability::trace::TraceId;

/// Convert any panic escaping the inner stack (probes included) into the
/// uniform error body, logged with the request path and trace id. Sits
/// inside the timing layer so even this path gets a process-time header.
pub async fn catch_unhandled(request: Request, next: Next) -> Response {
    let trace_id = request
        .extensions()
        .get::<TraceId>()
        .cloned()
        .unwrap_or_else(TraceId::generate);
    let path = request.uri().path().to_string();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let error = panic_message(panic.as_ref());
            tracing::error!(
                event = "unhandled_exception",
                trace_id = %trace_id,
                path = %path,
                error = %error,
                "Unhandled exception occurred"
            );
            ServiceError::Unhandled {
                trace_id: trace_id.as_str().to_string(),
            }
            .into_response()
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
