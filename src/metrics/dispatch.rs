//! Event dispatch: lifecycle events in, at most one metric sample out.
//!
//! # Responsibilities
//! - Route stop and exception events to the builder, classifier and store
//! - Enforce the payload and duration contracts with diagnostics
//! - Record exactly one sample per valid stop event
//!
//! # Design Decisions
//! - No stored per-request state beyond the correlation entry
//! - Violations are logged and dropped; nothing propagates to the caller
//! - Reentrant: concurrent events for different requests never interfere

use std::sync::Arc;

use opentelemetry::metrics::Meter;
use opentelemetry::KeyValue;

use crate::config::TelemetryConfig;
use crate::events::facts::{decode_exception, RequestFacts, ResponseFacts};
use crate::events::{EventPayload, REQUEST_EXCEPTION, REQUEST_STOP};
use crate::metrics::attributes::build_attributes;
use crate::metrics::classify::{RangeStatusPolicy, StatusPolicy};
use crate::metrics::correlation::{CorrelationStore, ErrorTypeSlot};
use crate::metrics::recorder::DurationRecorder;
use crate::metrics::semconv;

/// Routes request lifecycle events and records duration samples.
pub struct EventDispatcher {
    recorder: DurationRecorder,
    policy: Arc<dyn StatusPolicy>,
    slot: Arc<dyn ErrorTypeSlot>,
}

impl EventDispatcher {
    /// Create a dispatcher with the default correlation store.
    pub fn new(meter: &Meter, policy: Arc<dyn StatusPolicy>) -> Self {
        Self::with_slot(meter, policy, Arc::new(CorrelationStore::new()))
    }

    /// Create a dispatcher whose classification policy comes from
    /// configuration.
    pub fn from_config(meter: &Meter, config: &TelemetryConfig) -> Self {
        Self::new(
            meter,
            Arc::new(RangeStatusPolicy::from_config(&config.classification)),
        )
    }

    /// Create a dispatcher with a host-supplied error-type slot.
    pub fn with_slot(
        meter: &Meter,
        policy: Arc<dyn StatusPolicy>,
        slot: Arc<dyn ErrorTypeSlot>,
    ) -> Self {
        Self {
            recorder: DurationRecorder::new(meter),
            policy,
            slot,
        }
    }

    /// Route one event by name. Unknown event names are ignored.
    pub fn dispatch(&self, event: &str, payload: &EventPayload) {
        match event {
            REQUEST_STOP => self.on_stop(payload),
            REQUEST_EXCEPTION => self.on_exception(payload),
            _ => {}
        }
    }

    /// An exception event stores the error type for the stop event to pick
    /// up. It never records a metric by itself.
    fn on_exception(&self, payload: &EventPayload) {
        let Some((id, _)) = RequestFacts::decode(payload) else {
            tracing::warn!(
                event = REQUEST_EXCEPTION,
                "request record missing, dropping event"
            );
            return;
        };
        let Some(error_type) = decode_exception(payload) else {
            tracing::warn!(
                event = REQUEST_EXCEPTION,
                request_id = %id,
                "exception fact missing, dropping event"
            );
            return;
        };
        self.slot.set(id, error_type.to_string());
    }

    /// A stop event records exactly one sample, whether or not a response
    /// was received.
    fn on_stop(&self, payload: &EventPayload) {
        let Some((id, request)) = RequestFacts::decode(payload) else {
            tracing::warn!(
                event = REQUEST_STOP,
                "request record missing, dropping event"
            );
            return;
        };
        let Some(elapsed_secs) = payload.elapsed_secs else {
            tracing::warn!(
                event = REQUEST_STOP,
                request_id = %id,
                "elapsed duration missing, dropping event"
            );
            return;
        };
        if !elapsed_secs.is_finite() || elapsed_secs < 0.0 {
            tracing::warn!(
                event = REQUEST_STOP,
                request_id = %id,
                elapsed_secs,
                "invalid elapsed duration, dropping event"
            );
            return;
        }

        let response = ResponseFacts::decode(payload);
        let mut attributes = build_attributes(&request, response.as_ref(), self.policy.as_ref());

        // No response: the error type, if any, was stored by the exception
        // path under this request's identity.
        if response.is_none() {
            if let Some(error_type) = self.slot.take(id) {
                attributes.push(KeyValue::new(semconv::ERROR_TYPE, error_type));
            }
        }

        self.recorder.record(elapsed_secs, &attributes);
    }
}
