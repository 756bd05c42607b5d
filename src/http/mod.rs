//! HTTP shell around the intake core.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routes, middleware)
//!     → form POST parsed into a Submission descriptor
//!     → intake core decides the outcome
//!     → pages.rs renders the matching page / redirect
//! ```
//!
//! # Design Decisions
//! - The shell owns all axum types; the intake core never sees them
//! - Outcome → HTTP mapping: accepted = 303 to the disclosure page,
//!   invalid = 200 re-render with the error, rate-limited = 429

pub mod pages;
pub mod server;

pub use server::{AppState, HttpServer};
