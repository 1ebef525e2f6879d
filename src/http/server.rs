//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with probe and prediction handlers
//! - Wire up middleware (timing, trace ids, error translation, tracing)
//! - Hold the shared application state (readiness flags + model handle)
//! - Serve with graceful shutdown

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use axum::routing::{get, post};
use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::health::probes::{liveness_probe, readiness_probe};
use crate::health::state::ReadinessState;
use crate::http::middleware::catch_unhandled::catch_unhandled;
use crate::http::middleware::timing::process_time;
use crate::http::middleware::trace_context::propagate_trace_id;
use crate::http::predict::predict;
use crate::model::Classifier;

/// Shared model handle: absent until the startup load publishes a classifier,
/// read-only afterwards. The single `store` is the atomic handoff that makes
/// the model visible to every in-flight request at once.
pub type ModelHandle = Arc<ArcSwapOption<Box<dyn Classifier>>>;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<ReadinessState>,
    pub model: ModelHandle,
}

impl AppState {
    /// Fresh state at process start: alive, not ready, no model.
    pub fn new() -> Self {
        Self {
            readiness: Arc::new(ReadinessState::new()),
            model: Arc::new(ArcSwapOption::empty()),
        }
    }

    /// Publish a classifier and flip readiness. The model is stored before
    /// the flag so a reader that observes ready always observes the model.
    pub fn publish_model(&self, model: Box<dyn Classifier>) {
        self.model.store(Some(Arc::new(model)));
        self.readiness.mark_ready();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP server for the inference service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server around the given application state.
    pub fn new(state: AppState) -> Self {
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers. Ordering: timing is
    /// outermost so every exit path gets a process-time header; the trace
    /// context must exist before the error translator runs.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/live_check", get(liveness_probe))
            .route("/ready_check", get(readiness_probe))
            .route("/predict", post(predict))
            .with_state(state)
            .layer(middleware::from_fn(catch_unhandled))
            .layer(middleware::from_fn(propagate_trace_id))
            .layer(middleware::from_fn(process_time))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
