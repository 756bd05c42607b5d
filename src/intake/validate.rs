//! Structural validation of submitted form fields.
//!
//! # Responsibilities
//! - Enforce length bounds on the required fields
//! - Coerce the optional remember-me flag via its exact form sentinel
//! - Report the first violated constraint with field and message
//!
//! # Design Decisions
//! - Short-circuits on the first violation; nothing is ever partially
//!   persisted on failure
//! - Username is trimmed before measuring; passwords are taken verbatim
//!   (leading/trailing whitespace can be deliberate)
//! - Lengths are measured in characters, not bytes, so multi-byte input
//!   is bounded the way the form communicates it

use std::collections::HashMap;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 32;
pub const PASSWORD_MIN: usize = 3;
pub const PASSWORD_MAX: usize = 128;

/// Form value the browser sends for a checked remember-me box.
const REMEMBER_SENTINEL: &str = "1";

/// First violated constraint of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Normalized field values of a structurally valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// Validate raw form fields, returning normalized values or the first
/// violated constraint.
pub fn validate_fields(fields: &HashMap<String, String>) -> Result<ValidFields, FieldError> {
    let username = fields
        .get("username")
        .map(|v| v.trim())
        .unwrap_or("");
    let username_len = username.chars().count();
    if username_len < USERNAME_MIN || username_len > USERNAME_MAX {
        return Err(FieldError {
            field: "username",
            message: format!(
                "Username must be between {} and {} characters.",
                USERNAME_MIN, USERNAME_MAX
            ),
        });
    }

    let password = fields.get("password").map(String::as_str).unwrap_or("");
    let password_len = password.chars().count();
    if password_len < PASSWORD_MIN || password_len > PASSWORD_MAX {
        return Err(FieldError {
            field: "password",
            message: format!(
                "Password must be between {} and {} characters.",
                PASSWORD_MIN, PASSWORD_MAX
            ),
        });
    }

    let remember = fields
        .get("remember")
        .map(|v| v == REMEMBER_SENTINEL)
        .unwrap_or(false);

    Ok(ValidFields {
        username: username.to_string(),
        password: password.to_string(),
        remember,
    })
}
