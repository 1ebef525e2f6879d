//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Bind listener → spawn one-time model load → publish + mark ready
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → stop accepting → drain in-flight requests
//! ```
//!
//! # Design Decisions
//! - Probes answer before the load completes; readiness flips only after
//!   the model is published
//! - A failed load is logged and left permanent; no automatic retry

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
