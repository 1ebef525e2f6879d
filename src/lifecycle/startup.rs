//! Startup model loading.

use std::path::PathBuf;

use crate::http::server::AppState;
use crate::model::load_classifier;

/// Attempt the one-time model load and publish the result.
///
/// On success the model handle is stored before the readiness flag flips, so
/// a reader that observes ready always observes a model. On any failure the
/// service stays permanently not-ready: the error is logged with its reason
/// and the operator restarts the process.
pub async fn load_model(state: AppState, path: PathBuf) {
    tracing::info!(path = %path.display(), "Attempting to load model");

    match load_classifier(&path) {
        Ok(model) => {
            state.publish_model(Box::new(model));
            tracing::info!("Model loaded successfully. Service is ready.");
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %path.display(),
                "Failed to load model on startup"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failed_load_leaves_service_not_ready() {
        let state = AppState::new();
        load_model(state.clone(), PathBuf::from("/nonexistent/model.json")).await;
        assert!(!state.readiness.is_ready());
        assert!(state.model.load().is_none());
    }
}
