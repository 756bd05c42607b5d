//! Boundary types exchanged with the presentation layer.

use std::collections::{BTreeMap, HashMap};

/// One inbound form submission plus its ambient request context.
///
/// Header names are expected in lowercase; the HTTP shell normalizes them
/// when it builds the descriptor.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    /// Decoded form fields.
    pub fields: HashMap<String, String>,

    /// Full request header map (lowercase names).
    pub headers: BTreeMap<String, String>,

    /// Raw peer address of the connection (IP without port).
    pub peer_addr: String,

    /// Peer source port.
    pub remote_port: u16,

    /// HTTP method of the submission request.
    pub method: String,

    /// Request path of the submission request.
    pub path: String,
}

impl Submission {
    /// Look up a header by lowercase name, defaulting to empty.
    pub fn header(&self, name: &str) -> &str {
        self.headers.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Terminal decision for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Submission admitted, validated, and handed to the capture store.
    Accepted,

    /// Identity exceeded the admission ceiling within the window.
    /// Nothing was validated or persisted.
    RateLimited,

    /// A field violated a structural constraint. Nothing was persisted.
    Invalid {
        field: &'static str,
        message: String,
    },
}
