//! Client identity resolution.
//!
//! # Responsibilities
//! - Derive one stable identity string per logical client
//! - Honor the forwarded-address header from the nearest proxy when trusted
//! - Fall back to the raw peer address on anything missing or malformed
//!
//! # Design Decisions
//! - Pure function of request context; resolution never fails
//! - No address syntax validation: malformed header values pass through
//!   unchanged, they still make a usable rate-limit key
//! - The forwarded header is spoofable by a direct client; trust is a
//!   deployment decision carried in config, not hardcoded

use std::collections::BTreeMap;

use crate::config::IdentityConfig;

/// Resolves a trust-aware identity key for a caller.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    trust_forwarded: bool,
    forwarded_header: String,
}

impl IdentityResolver {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            trust_forwarded: config.trust_forwarded_header,
            forwarded_header: config.forwarded_header.to_lowercase(),
        }
    }

    /// Derive the identity for a request.
    ///
    /// With header trust enabled and a non-empty forwarded header present,
    /// the first comma-separated token (the nearest proxy's claim about the
    /// original client) is used, trimmed. Otherwise the peer address is the
    /// identity.
    pub fn resolve(&self, headers: &BTreeMap<String, String>, peer_addr: &str) -> String {
        if self.trust_forwarded {
            if let Some(value) = headers.get(&self.forwarded_header) {
                let first = value.split(',').next().unwrap_or("").trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }
        peer_addr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdentityConfig;

    fn resolver(trust: bool) -> IdentityResolver {
        IdentityResolver::new(&IdentityConfig {
            trust_forwarded_header: trust,
            forwarded_header: "x-forwarded-for".into(),
        })
    }

    fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn uses_first_forwarded_hop() {
        let h = headers(&[("x-forwarded-for", " 10.0.0.5 , 172.16.0.1, 192.168.1.1")]);
        assert_eq!(resolver(true).resolve(&h, "127.0.0.1"), "10.0.0.5");
    }

    #[test]
    fn falls_back_to_peer_address() {
        let h = headers(&[("user-agent", "curl/8.0")]);
        assert_eq!(resolver(true).resolve(&h, "203.0.113.9"), "203.0.113.9");
    }

    #[test]
    fn empty_forwarded_value_falls_back() {
        let h = headers(&[("x-forwarded-for", "  ")]);
        assert_eq!(resolver(true).resolve(&h, "203.0.113.9"), "203.0.113.9");
    }

    #[test]
    fn malformed_value_passes_through_unchanged() {
        let h = headers(&[("x-forwarded-for", "not-an-ip-at-all")]);
        assert_eq!(resolver(true).resolve(&h, "127.0.0.1"), "not-an-ip-at-all");
    }

    #[test]
    fn untrusted_header_is_ignored() {
        let h = headers(&[("x-forwarded-for", "10.0.0.5")]);
        assert_eq!(resolver(false).resolve(&h, "203.0.113.9"), "203.0.113.9");
    }

    #[test]
    fn resolution_is_idempotent() {
        let h = headers(&[("x-forwarded-for", "10.0.0.5, 172.16.0.1")]);
        let r = resolver(true);
        assert_eq!(r.resolve(&h, "127.0.0.1"), r.resolve(&h, "127.0.0.1"));
    }
}
