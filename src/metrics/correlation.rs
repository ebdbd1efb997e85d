//! Per-request error-type correlation.
//!
//! Exception events record the discovered error type here; a stop event
//! that never saw a response reads it back to tag its sample.

use dashmap::DashMap;

use crate::events::RequestId;

/// A writable slot holding the error type discovered before a request
/// completed.
///
/// One slot implementation is chosen by the host; [`CorrelationStore`] is
/// the shipped default.
pub trait ErrorTypeSlot: Send + Sync {
    /// Record the error type for a request. Last write wins.
    fn set(&self, request: RequestId, error_type: String);

    /// Read and clear the stored error type, if any.
    fn take(&self, request: RequestId) -> Option<String>;
}

/// Identity-keyed concurrent store backing the default slot.
///
/// Entries are removed when read, so a normally completed request leaves
/// nothing behind; only a request that faults and then never stops leaves
/// an entry, bounded by one per abandoned request.
#[derive(Debug, Default)]
pub struct CorrelationStore {
    inner: DashMap<RequestId, String>,
}

impl CorrelationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorTypeSlot for CorrelationStore {
    fn set(&self, request: RequestId, error_type: String) {
        self.inner.insert(request, error_type);
    }

    fn take(&self, request: RequestId) -> Option<String> {
        self.inner.remove(&request).map(|(_, error_type)| error_type)
    }
}
