//! Iris Classifier Inference Service Library
//!
//! Loads a pre-trained classifier once at startup, exposes liveness and
//! readiness probes, and serves a single prediction endpoint with
//! trace-correlated structured logging and per-request timing.

pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
