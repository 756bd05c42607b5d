//! Submission intake subsystem.
//!
//! # Data Flow
//! ```text
//! Parsed form submission (from the HTTP shell)
//!     → identity.rs (derive a stable per-client key)
//!     → rate_limit.rs (admit or reject against the sliding window)
//!     → validate.rs (structural field checks)
//!     → capture store append (via orchestrator.rs)
//!     → Outcome reported back to the shell
//! ```
//!
//! # Design Decisions
//! - The core is synchronous and transport-agnostic; it only sees the
//!   `Submission` descriptor, never axum types
//! - Rate-limit rejections terminate before validation; invalid submissions
//!   terminate before logging
//! - Capture failures never change the reported outcome

pub mod identity;
pub mod orchestrator;
pub mod rate_limit;
pub mod submission;
pub mod validate;

pub use identity::IdentityResolver;
pub use orchestrator::Intake;
pub use rate_limit::{Clock, ManualClock, SlidingWindowLimiter, SystemClock};
pub use submission::{Outcome, Submission};
pub use validate::{validate_fields, FieldError, ValidFields};
