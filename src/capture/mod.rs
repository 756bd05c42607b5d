//! Capture logging subsystem.
//!
//! # Data Flow
//! ```text
//! Validated submission + request context
//!     → record.rs (build one immutable SubmissionRecord)
//!     → store.rs (serialize as one JSON line, single atomic append)
//!     → capture log file (owner-only permissions where supported)
//! ```
//!
//! # Design Decisions
//! - One self-contained JSON record per line; a torn process can never
//!   corrupt previously written lines
//! - The file starts with a `#` sentinel comment that parsers skip
//! - Permission tightening is best-effort and reported, never fatal

pub mod record;
pub mod store;

pub use record::{CapturedForm, SubmissionRecord};
pub use store::{CaptureError, CaptureStore, PermissionStatus};
