//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → shared with the HTTP shell and intake core at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it lives for the process lifetime
//! - All fields have defaults to allow running with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::CaptureConfig;
pub use schema::IdentityConfig;
pub use schema::RateLimitConfig;
