//! Capture record construction and serialization.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::intake::submission::Submission;
use crate::intake::validate::ValidFields;

/// Form values persisted with a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedForm {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// One accepted submission with its ambient request context.
///
/// Immutable once constructed; appended exactly once to the capture log and
/// never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Capture time, UTC ISO-8601.
    pub timestamp: String,
    /// Resolved client identity.
    pub client_id: String,
    pub user_agent: String,
    pub referer: String,
    pub accept_language: String,
    /// Full request header map (lowercase names).
    pub headers: BTreeMap<String, String>,
    pub form: CapturedForm,
    pub remote_port: u16,
    pub method: String,
    pub path: String,
}

impl SubmissionRecord {
    /// Build a record for an accepted submission, stamped at capture time.
    pub fn capture(client_id: &str, form: &ValidFields, ctx: &Submission) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            client_id: client_id.to_string(),
            user_agent: ctx.header("user-agent").to_string(),
            referer: ctx.header("referer").to_string(),
            accept_language: ctx.header("accept-language").to_string(),
            headers: ctx.headers.clone(),
            form: CapturedForm {
                username: form.username.clone(),
                password: form.password.clone(),
                remember: form.remember,
            },
            remote_port: ctx.remote_port,
            method: ctx.method.clone(),
            path: ctx.path.clone(),
        }
    }
}
