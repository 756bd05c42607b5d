//! Sliding-window rate limiting for form submissions.
//!
//! # Responsibilities
//! - Track admitted attempt timestamps per client identity
//! - Admit or reject each attempt against a trailing window
//! - Prune expired attempts lazily on every check (no background sweep)
//!
//! # Design Decisions
//! - One coarse mutex over the whole map: the prune-check-record sequence
//!   must be atomic so concurrent submitters can never push an identity
//!   past its ceiling
//! - Rejected attempts are not recorded; only admissions occupy window slots
//! - Per-identity entries live for the process lifetime; stale timestamps
//!   age out, the map entry itself does not
//! - Time comes through a `Clock` so window expiry is testable without
//!   sleeping

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of monotonic time for the limiter.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Production clock backed by `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Advance the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("manual clock mutex poisoned");
        *now += delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("manual clock mutex poisoned")
    }
}

/// Per-identity sliding-window limiter.
pub struct SlidingWindowLimiter {
    windows: Mutex<HashMap<String, Vec<Instant>>>,
    max_requests: usize,
    window: Duration,
    clock: Box<dyn Clock>,
}

impl SlidingWindowLimiter {
    /// Create a limiter with the system clock.
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self::with_clock(max_requests, window, Box::new(SystemClock))
    }

    /// Create a limiter with an explicit clock (tests use `ManualClock`).
    pub fn with_clock(max_requests: usize, window: Duration, clock: Box<dyn Clock>) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_requests,
            window,
            clock,
        }
    }

    /// Decide whether to admit one attempt for `identity`.
    ///
    /// Runs the prune-check-record sequence atomically under the map lock.
    /// Unknown identities start with an empty window and are always admitted
    /// on first contact. Never panics on malformed input.
    pub fn admit(&self, identity: &str) -> bool {
        let now = self.clock.now();
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        let attempts = windows.entry(identity.to_string()).or_default();

        attempts.retain(|t| now.duration_since(*t) < self.window);

        if attempts.len() >= self.max_requests {
            return false;
        }

        attempts.push(now);
        true
    }

    /// Number of attempts currently occupying `identity`'s window.
    ///
    /// Counts against the same pruning rule as `admit`; mostly useful for
    /// tests and diagnostics.
    pub fn occupancy(&self, identity: &str) -> usize {
        let now = self.clock.now();
        let windows = self.windows.lock().expect("rate limiter mutex poisoned");
        windows
            .get(identity)
            .map(|attempts| {
                attempts
                    .iter()
                    .filter(|t| now.duration_since(**t) < self.window)
                    .count()
            })
            .unwrap_or(0)
    }
}
