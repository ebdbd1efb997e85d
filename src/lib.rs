//! HTTP Client Duration Metrics
//!
//! Observes outbound HTTP client requests and records one
//! `http.client.request.duration` histogram sample per request, tagged with
//! semantic-convention attributes (method, host, scheme, port, protocol
//! version, status code, error classification).
//!
//! # Data Flow
//! ```text
//! outbound request (InstrumentedClient or host-owned HTTP layer)
//!     → events (typed lifecycle payloads: stop, exception)
//!     → metrics::EventDispatcher
//!         exception → correlation store (error type per request)
//!         stop      → attribute builder + error classifier
//!                   → DurationRecorder.record(elapsed, tags)
//! ```
//!
//! Failures on this path are observability failures only: they are logged
//! and dropped, and never affect the underlying request.

pub mod config;
pub mod events;
pub mod instrument;
pub mod metrics;

pub use config::TelemetryConfig;
pub use events::{ErrorRecord, EventPayload, RequestId, RequestRecord, ResponseRecord};
pub use instrument::InstrumentedClient;
pub use metrics::EventDispatcher;
