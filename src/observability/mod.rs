//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters and latency histograms)
//!     → trace.rs (per-request trace ids correlating logs and responses)
//!
//! Consumers:
//!     → Log aggregation (line-delimited JSON on stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - One JSON object per log event for machine parsing
//! - The trace id flows through logs, spans, and the error response body
//! - Log emission is best-effort; transport failures never reach the
//!   request path

pub mod logging;
pub mod metrics;
pub mod trace;

pub use trace::{TraceId, X_TRACE_ID};
