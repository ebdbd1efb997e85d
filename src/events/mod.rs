//! Request lifecycle events.
//!
//! # Data Flow
//! ```text
//! HTTP execution layer (InstrumentedClient or host-owned)
//!     → EventPayload (typed records snapshot at event time)
//!     → metrics::EventDispatcher.dispatch(event name, payload)
//! ```
//!
//! # Design Decisions
//! - Two event kinds: an optional `request.exception` followed by the
//!   terminal `request.stop`; unknown names are a forward-compatible no-op
//! - Payload fields are explicit typed records, decoded per event kind;
//!   a missing field is "not found", never a panic
//! - Elapsed duration is measured by the event source, not recomputed here

use std::fmt;

use url::Url;
use uuid::Uuid;

pub mod facts;

pub use facts::{RequestFacts, ResponseFacts, UriFacts};

/// Event name for a request that reached its end, with or without a response.
pub const REQUEST_STOP: &str = "request.stop";

/// Event name for a request that failed with an error before completing.
/// Always observed before the corresponding [`REQUEST_STOP`].
pub const REQUEST_EXCEPTION: &str = "request.exception";

/// Identity handle for a single in-flight request.
///
/// Minted once per request by the collaborator that owns the request, so two
/// requests with identical methods and URLs never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Mint a fresh identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Payload delivered with a lifecycle event.
///
/// The event source fills in whatever it knows; decoders extract the facts a
/// given event kind needs and report absence instead of failing.
#[derive(Debug, Default)]
pub struct EventPayload {
    /// The request the event belongs to.
    pub request: Option<RequestRecord>,

    /// The received response, absent if the request failed before one.
    pub response: Option<ResponseRecord>,

    /// The error that ended the request, for exception events.
    pub error: Option<ErrorRecord>,

    /// Elapsed request time in seconds, measured by the caller's timer.
    /// Required on stop events.
    pub elapsed_secs: Option<f64>,
}

/// Raw request data captured by the event source.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    /// Request identity.
    pub id: RequestId,

    /// Method string as sent, not yet normalized.
    pub method: String,

    /// Target URL, when one is known.
    pub url: Option<Url>,
}

/// Raw response data captured by the event source.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRecord {
    /// HTTP protocol major version.
    pub version_major: u8,

    /// HTTP protocol minor version.
    pub version_minor: u8,

    /// Response status code.
    pub status_code: u16,
}

/// The error that ended a request before a response arrived.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    /// Stable error-kind identifier, recorded verbatim as `error.type`.
    pub error_type: String,
}
