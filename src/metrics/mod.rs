//! Event-to-metric mapping subsystem.
//!
//! # Data Flow
//! ```text
//! events (stop / exception payloads)
//!     → dispatch.rs (route, enforce contracts)
//!         exception → correlation.rs (error type per request identity)
//!         stop      → attributes.rs + classify.rs (tag derivation)
//!                   → recorder.rs (histogram sample)
//! ```
//!
//! # Design Decisions
//! - Attribute derivation is a pure function, testable in isolation
//! - The classification policy and the error-type slot are trait seams the
//!   host can replace
//! - The histogram instrument is constructor-injected, not global

pub mod attributes;
pub mod classify;
pub mod correlation;
pub mod dispatch;
pub mod recorder;
pub mod semconv;

pub use classify::{RangeStatusPolicy, StatusPolicy};
pub use correlation::{CorrelationStore, ErrorTypeSlot};
pub use dispatch::EventDispatcher;
pub use recorder::DurationRecorder;
