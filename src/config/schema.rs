//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! training page. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Client identity resolution policy.
    pub identity: IdentityConfig,

    /// Submission rate limiting.
    pub rate_limit: RateLimitConfig,

    /// Capture log settings.
    pub capture: CaptureConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            // Lab tool: loopback by default, put a reverse proxy in front
            // for anything wider.
            bind_address: "127.0.0.1:5000".to_string(),
        }
    }
}

/// Client identity resolution policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Trust the forwarded-address header from the nearest proxy.
    ///
    /// The header is spoofable by any directly connected client, so this
    /// should be false when the listener is exposed without a proxy.
    pub trust_forwarded_header: bool,

    /// Header carrying the forwarded client address (lowercase).
    pub forwarded_header: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            trust_forwarded_header: true,
            forwarded_header: "x-forwarded-for".to_string(),
        }
    }
}

/// Submission rate limiting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Maximum admitted submissions per identity per window.
    pub max_requests: usize,

    /// Sliding window length in seconds.
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window_seconds: 60,
        }
    }
}

/// Capture log settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Path of the append-only capture log.
    pub log_path: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            log_path: "capture.log".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter when RUST_LOG is unset.
    pub log_filter: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "phishdrill=debug,tower_http=info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
