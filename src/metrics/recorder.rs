//! Duration histogram wiring.

use opentelemetry::metrics::{Histogram, Meter};
use opentelemetry::KeyValue;

use crate::metrics::semconv;

/// The request duration histogram.
///
/// Created once per component from the host's meter and shared for the
/// component's lifetime. Recording is append-only aggregation in the SDK,
/// safe under unbounded concurrent callers.
#[derive(Clone)]
pub struct DurationRecorder {
    histogram: Histogram<f64>,
}

impl DurationRecorder {
    /// Build the instrument with its fixed name, unit, description and
    /// bucket boundaries.
    pub fn new(meter: &Meter) -> Self {
        let histogram = meter
            .f64_histogram(semconv::HTTP_CLIENT_REQUEST_DURATION)
            .with_unit(semconv::DURATION_UNIT)
            .with_description(semconv::DURATION_DESCRIPTION)
            .with_boundaries(semconv::DURATION_BUCKETS.to_vec())
            .build();
        Self { histogram }
    }

    /// Record one duration sample with its attribute set.
    pub fn record(&self, elapsed_secs: f64, attributes: &[KeyValue]) {
        self.histogram.record(elapsed_secs, attributes);
    }
}
