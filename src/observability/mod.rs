//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Intake core and HTTP shell produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (submission and warning counters)
//!
//! Consumers:
//!     → stdout log stream (filtered via RUST_LOG or config)
//!     → optional Prometheus scrape endpoint
//! ```
//!
//! # Design Decisions
//! - Capture warnings surface here and nowhere else; submitters never see
//!   persistence problems
//! - Counter updates are cheap enough to sit on the submission hot path
//! - The metrics endpoint is off by default for a loopback lab tool

pub mod logging;
pub mod metrics;
