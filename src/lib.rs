//! Mock credential-capture landing page for security-awareness training.
//!
//! Renders a convincing login form, accepts submitted credentials, records
//! contextual metadata about the submitter, and redirects to a disclosure
//! page explaining what was captured and why. Never imitates a real brand
//! and never touches real accounts.
//!
//! The interesting part is the intake pipeline: per-submission identity
//! resolution, sliding-window rate limiting, field validation, and durable
//! append-only capture logging. The HTTP layer is a thin shell over it.

pub mod capture;
pub mod config;
pub mod http;
pub mod intake;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use intake::{Intake, Outcome, Submission};
pub use lifecycle::Shutdown;
