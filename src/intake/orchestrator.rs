//! Per-submission decision pipeline.
//!
//! One submission moves through: identity resolution → rate check →
//! validation → capture logging. Rate-limit rejections stop before
//! validation; invalid submissions stop before logging; logging problems
//! are downgraded to warnings and the submission still reports accepted.

use std::sync::Arc;

use crate::capture::store::{CaptureError, CaptureStore, PermissionStatus};
use crate::capture::SubmissionRecord;
use crate::intake::identity::IdentityResolver;
use crate::intake::rate_limit::SlidingWindowLimiter;
use crate::intake::submission::{Outcome, Submission};
use crate::intake::validate::validate_fields;
use crate::observability::metrics;

/// Process-scoped intake pipeline.
///
/// Constructed once at startup and shared across request handlers; all
/// methods are synchronous and safe to call concurrently.
pub struct Intake {
    resolver: IdentityResolver,
    limiter: SlidingWindowLimiter,
    store: Arc<CaptureStore>,
}

impl Intake {
    pub fn new(
        resolver: IdentityResolver,
        limiter: SlidingWindowLimiter,
        store: Arc<CaptureStore>,
    ) -> Self {
        Self {
            resolver,
            limiter,
            store,
        }
    }

    /// Decide the outcome of one submission.
    pub fn handle(&self, submission: &Submission) -> Outcome {
        let identity = self
            .resolver
            .resolve(&submission.headers, &submission.peer_addr);

        if !self.limiter.admit(&identity) {
            tracing::warn!(client = %identity, "Submission rejected by rate limiter");
            metrics::record_rate_limited();
            metrics::record_submission("rate_limited");
            return Outcome::RateLimited;
        }

        let valid = match validate_fields(&submission.fields) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::debug!(
                    client = %identity,
                    field = e.field,
                    "Submission failed validation"
                );
                metrics::record_submission("invalid");
                return Outcome::Invalid {
                    field: e.field,
                    message: e.message,
                };
            }
        };

        let record = SubmissionRecord::capture(&identity, &valid, submission);
        match self.store.append(&record) {
            Ok(PermissionStatus::Failed(e)) => {
                tracing::warn!(
                    error = %e,
                    path = %self.store.path().display(),
                    "Failed to tighten capture log permissions"
                );
                metrics::record_capture_warning("permissions");
            }
            Ok(_) => {
                tracing::info!(
                    client = %identity,
                    username = %valid.username,
                    "Submission captured"
                );
            }
            Err(e) => {
                // Capture failure must not block the training flow.
                warn_capture_failure(&e);
                metrics::record_capture_warning("append");
            }
        }

        metrics::record_submission("accepted");
        Outcome::Accepted
    }
}

fn warn_capture_failure(error: &CaptureError) {
    tracing::warn!(error = %error, "Capture append failed; submission still accepted");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IdentityConfig, RateLimitConfig};
    use crate::intake::rate_limit::ManualClock;
    use std::collections::{BTreeMap, HashMap};
    use std::time::Duration;

    fn build_intake(
        rate: &RateLimitConfig,
        clock: ManualClock,
        store: Arc<CaptureStore>,
    ) -> Intake {
        Intake::new(
            IdentityResolver::new(&IdentityConfig::default()),
            SlidingWindowLimiter::with_clock(
                rate.max_requests,
                Duration::from_secs(rate.window_seconds),
                Box::new(clock),
            ),
            store,
        )
    }

    fn temp_store(dir: &tempfile::TempDir) -> Arc<CaptureStore> {
        Arc::new(CaptureStore::open(dir.path().join("capture.log")).unwrap())
    }

    fn submission(peer: &str, username: &str, password: &str) -> Submission {
        let mut fields = HashMap::new();
        fields.insert("username".to_string(), username.to_string());
        fields.insert("password".to_string(), password.to_string());
        let mut headers = BTreeMap::new();
        headers.insert("user-agent".to_string(), "Mozilla/5.0 (lab)".to_string());
        Submission {
            fields,
            headers,
            peer_addr: peer.to_string(),
            remote_port: 40000,
            method: "POST".to_string(),
            path: "/login".to_string(),
        }
    }

    #[test]
    fn valid_submission_is_accepted_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let intake = build_intake(&RateLimitConfig::default(), ManualClock::new(), store.clone());

        let outcome = intake.handle(&submission("10.0.0.5", "alice", "secret1"));
        assert_eq!(outcome, Outcome::Accepted);

        let records = store.read_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].form.username, "alice");
        assert_eq!(records[0].client_id, "10.0.0.5");
    }

    #[test]
    fn invalid_submission_reports_field_and_persists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let intake = build_intake(&RateLimitConfig::default(), ManualClock::new(), store.clone());

        match intake.handle(&submission("10.0.0.5", "ab", "secret1")) {
            Outcome::Invalid { field, .. } => assert_eq!(field, "username"),
            other => panic!("expected invalid outcome, got {:?}", other),
        }
        match intake.handle(&submission("10.0.0.5", "alice", "x")) {
            Outcome::Invalid { field, .. } => assert_eq!(field, "password"),
            other => panic!("expected invalid outcome, got {:?}", other),
        }
        assert!(store.read_records().unwrap().is_empty());
    }

    #[test]
    fn rate_limit_stops_before_validation_and_logging() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let rate = RateLimitConfig {
            max_requests: 2,
            window_seconds: 60,
        };
        let intake = build_intake(&rate, ManualClock::new(), store.clone());

        assert_eq!(
            intake.handle(&submission("10.0.0.5", "alice", "secret1")),
            Outcome::Accepted
        );
        assert_eq!(
            intake.handle(&submission("10.0.0.5", "alice", "secret1")),
            Outcome::Accepted
        );
        // Over the ceiling even an invalid submission reports the rate
        // limit, not the validation failure.
        assert_eq!(
            intake.handle(&submission("10.0.0.5", "ab", "x")),
            Outcome::RateLimited
        );
        assert_eq!(store.read_records().unwrap().len(), 2);
    }

    #[test]
    fn window_expiry_readmits_the_same_identity() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let clock = ManualClock::new();
        let intake = build_intake(&RateLimitConfig::default(), clock.clone(), store);

        for _ in 0..10 {
            assert_eq!(
                intake.handle(&submission("10.0.0.5", "alice", "secret1")),
                Outcome::Accepted
            );
        }
        assert_eq!(
            intake.handle(&submission("10.0.0.5", "alice", "secret1")),
            Outcome::RateLimited
        );

        clock.advance(Duration::from_secs(61));
        assert_eq!(
            intake.handle(&submission("10.0.0.5", "alice", "secret1")),
            Outcome::Accepted
        );
    }

    #[test]
    fn forwarded_header_keys_the_limiter() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);
        let rate = RateLimitConfig {
            max_requests: 1,
            window_seconds: 60,
        };
        let intake = build_intake(&rate, ManualClock::new(), store);

        let mut a = submission("127.0.0.1", "alice", "secret1");
        a.headers
            .insert("x-forwarded-for".to_string(), "10.0.0.5".to_string());
        let mut b = submission("127.0.0.1", "alice", "secret1");
        b.headers
            .insert("x-forwarded-for".to_string(), "10.0.0.6".to_string());

        // Same peer, different forwarded identities: independent windows.
        assert_eq!(intake.handle(&a), Outcome::Accepted);
        assert_eq!(intake.handle(&b), Outcome::Accepted);
        assert_eq!(intake.handle(&a), Outcome::RateLimited);
    }

    #[cfg(unix)]
    #[test]
    fn capture_append_failure_still_reports_accepted() {
        // /dev/full accepts the open but fails every write with ENOSPC.
        let store = Arc::new(CaptureStore::open("/dev/full").unwrap());
        let intake = build_intake(&RateLimitConfig::default(), ManualClock::new(), store);

        assert_eq!(
            intake.handle(&submission("10.0.0.5", "alice", "secret1")),
            Outcome::Accepted
        );
    }
}
