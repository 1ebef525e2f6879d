//! Health subsystem.
//!
//! # Data Flow
//! ```text
//! Startup loader:
//!     Model published → state.rs flips ready (at most once)
//!
//! Probes (probes.rs):
//!     GET /live_check  → alive flag only, never the model
//!     GET /ready_check → ready flag AND model presence
//! ```
//!
//! # Design Decisions
//! - Readiness is write-once: a failed load keeps the service not-ready
//!   for the whole process lifetime
//! - Probes are cheap and side-effect-free; no model invocation

pub mod probes;
pub mod state;

pub use state::ReadinessState;
