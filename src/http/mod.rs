//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/ (timing, trace id, error translation)
//!     → health probes or predict.rs
//!     → response (with x-process-time-ms and x-trace-id headers)
//! ```

pub mod middleware;
pub mod predict;
pub mod server;

pub use predict::{PredictionInput, PredictionResult};
pub use server::{AppState, HttpServer, ModelHandle};
