//! Semantic-convention names for the recorded metric and its attributes.
//!
//! Keys follow the OpenTelemetry HTTP semantic conventions:
//! <https://opentelemetry.io/docs/specs/semconv/http/http-metrics/>

pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
pub const SERVER_ADDRESS: &str = "server.address";
pub const URL_SCHEME: &str = "url.scheme";
pub const SERVER_PORT: &str = "server.port";
pub const NETWORK_PROTOCOL_VERSION: &str = "network.protocol.version";
pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
pub const ERROR_TYPE: &str = "error.type";

/// Instrument name for the request duration histogram.
pub const HTTP_CLIENT_REQUEST_DURATION: &str = "http.client.request.duration";

/// Instrument unit.
pub const DURATION_UNIT: &str = "s";

/// Instrument description.
pub const DURATION_DESCRIPTION: &str = "Duration of HTTP client requests.";

/// Histogram bucket boundaries, in seconds.
pub const DURATION_BUCKETS: [f64; 14] = [
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];
