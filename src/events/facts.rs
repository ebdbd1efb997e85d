//! Fact decoding: turn raw event records into normalized telemetry facts.
//!
//! # Responsibilities
//! - Extract request identity, method and URI facts from a payload
//! - Normalize method strings against the known-method list
//! - Map raw protocol version pairs to convention labels
//!
//! # Design Decisions
//! - Decoders return `None` for unexpected payload shapes; the dispatcher
//!   decides whether that is a protocol violation
//! - Facts are immutable snapshots taken at event time

use url::Url;

use crate::events::{EventPayload, RequestId, ResponseRecord};

/// Methods recognized by the normalizer, in canonical form.
const KNOWN_METHODS: &[&str] = &[
    "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
];

/// Normalize a method string against the known-method list.
///
/// Case-insensitive matches canonicalize to uppercase; anything else is
/// returned as-is.
pub fn normalize_method(raw: &str) -> String {
    for known in KNOWN_METHODS {
        if raw.eq_ignore_ascii_case(known) {
            return (*known).to_string();
        }
    }
    raw.to_string()
}

/// Convention label for a raw protocol version pair.
pub fn protocol_version_label(major: u8, minor: u8) -> String {
    match (major, minor) {
        (1, 0) => "1.0".to_string(),
        (1, 1) => "1.1".to_string(),
        (2, 0) => "2".to_string(),
        (3, 0) => "3".to_string(),
        _ => format!("{}.{}", major, minor),
    }
}

/// Normalized request facts snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFacts {
    /// Normalized method.
    pub method: String,

    /// URI facts, when a URI with a host is known.
    pub uri: Option<UriFacts>,
}

impl RequestFacts {
    /// Decode request identity and facts from a payload.
    ///
    /// Returns `None` when the payload carries no request record.
    pub fn decode(payload: &EventPayload) -> Option<(RequestId, RequestFacts)> {
        let record = payload.request.as_ref()?;
        let facts = RequestFacts {
            method: normalize_method(&record.method),
            uri: record.url.as_ref().and_then(UriFacts::from_url),
        };
        Some((record.id, facts))
    }
}

/// URI facts relevant to the attribute set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriFacts {
    /// URI host.
    pub host: String,

    /// URI scheme.
    pub scheme: String,

    /// Effective port, when one is known for the scheme.
    pub port: Option<u16>,

    /// Whether the port is the scheme's default.
    pub is_default_port: bool,
}

impl UriFacts {
    /// Extract URI facts from a parsed URL.
    ///
    /// Returns `None` for URLs without a host (nothing to report as
    /// `server.address`).
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = url.host_str()?.to_string();
        // Url::port() is populated only for an explicit, non-default port.
        let explicit_port = url.port();
        Some(Self {
            host,
            scheme: url.scheme().to_string(),
            port: explicit_port.or_else(|| url.port_or_known_default()),
            is_default_port: explicit_port.is_none(),
        })
    }
}

/// Normalized response facts snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFacts {
    /// Protocol version label ("1.0", "1.1", "2", "3", or "major.minor").
    pub protocol_version: String,

    /// Response status code.
    pub status_code: u16,
}

impl ResponseFacts {
    /// Decode response facts from a payload. `None` means no response was
    /// received.
    pub fn decode(payload: &EventPayload) -> Option<Self> {
        payload.response.as_ref().map(Self::from_record)
    }

    /// Build facts from a raw response record.
    pub fn from_record(record: &ResponseRecord) -> Self {
        Self {
            protocol_version: protocol_version_label(record.version_major, record.version_minor),
            status_code: record.status_code,
        }
    }
}

/// Decode the exception type identifier from an exception-event payload.
pub fn decode_exception(payload: &EventPayload) -> Option<&str> {
    payload.error.as_ref().map(|error| error.error_type.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RequestRecord;

    #[test]
    fn test_method_normalization() {
        assert_eq!(normalize_method("get"), "GET");
        assert_eq!(normalize_method("Post"), "POST");
        assert_eq!(normalize_method("DELETE"), "DELETE");
        // Unknown methods pass through untouched.
        assert_eq!(normalize_method("fetch"), "fetch");
        assert_eq!(normalize_method("PURGE"), "PURGE");
    }

    #[test]
    fn test_protocol_version_labels() {
        assert_eq!(protocol_version_label(1, 0), "1.0");
        assert_eq!(protocol_version_label(1, 1), "1.1");
        assert_eq!(protocol_version_label(2, 0), "2");
        assert_eq!(protocol_version_label(3, 0), "3");
        assert_eq!(protocol_version_label(0, 9), "0.9");
    }

    #[test]
    fn test_uri_facts_non_default_port() {
        let url = Url::parse("https://example.com:8443/path").unwrap();
        let facts = UriFacts::from_url(&url).unwrap();
        assert_eq!(facts.host, "example.com");
        assert_eq!(facts.scheme, "https");
        assert_eq!(facts.port, Some(8443));
        assert!(!facts.is_default_port);
    }

    #[test]
    fn test_uri_facts_default_port() {
        let url = Url::parse("https://example.com/path").unwrap();
        let facts = UriFacts::from_url(&url).unwrap();
        assert_eq!(facts.port, Some(443));
        assert!(facts.is_default_port);

        // An explicitly spelled default port is still the default.
        let url = Url::parse("https://example.com:443/path").unwrap();
        let facts = UriFacts::from_url(&url).unwrap();
        assert!(facts.is_default_port);
    }

    #[test]
    fn test_uri_facts_without_host() {
        let url = Url::parse("mailto:ops@example.com").unwrap();
        assert!(UriFacts::from_url(&url).is_none());
    }

    #[test]
    fn test_request_decode_requires_record() {
        assert!(RequestFacts::decode(&EventPayload::default()).is_none());

        let payload = EventPayload {
            request: Some(RequestRecord {
                id: RequestId::new(),
                method: "get".into(),
                url: None,
            }),
            ..Default::default()
        };
        let (_, facts) = RequestFacts::decode(&payload).unwrap();
        assert_eq!(facts.method, "GET");
        assert!(facts.uri.is_none());
    }
}
