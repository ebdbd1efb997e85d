//! Instrumented outbound HTTP client.
//!
//! The in-process HTTP execution layer: wraps a `reqwest::Client`, mints
//! request identities, times each request and emits the lifecycle events the
//! dispatcher consumes. A failed request emits `request.exception` before
//! its terminal `request.stop`, matching the per-request event ordering the
//! dispatcher relies on.

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, Request, Response, Version};

use crate::events::{
    ErrorRecord, EventPayload, RequestId, RequestRecord, ResponseRecord, REQUEST_EXCEPTION,
    REQUEST_STOP,
};
use crate::metrics::EventDispatcher;

/// A reqwest client wrapper that reports request durations.
#[derive(Clone)]
pub struct InstrumentedClient {
    client: Client,
    dispatcher: Arc<EventDispatcher>,
}

impl InstrumentedClient {
    /// Wrap a client so every executed request is reported.
    pub fn new(client: Client, dispatcher: Arc<EventDispatcher>) -> Self {
        Self { client, dispatcher }
    }

    /// Execute a request, timing it and reporting its outcome.
    ///
    /// The request result is returned untouched; telemetry never affects
    /// the underlying request.
    pub async fn execute(&self, request: Request) -> reqwest::Result<Response> {
        let record = RequestRecord {
            id: RequestId::new(),
            method: request.method().as_str().to_string(),
            url: Some(request.url().clone()),
        };
        let start = Instant::now();

        let result = self.client.execute(request).await;
        let elapsed_secs = start.elapsed().as_secs_f64();

        match &result {
            Ok(response) => {
                let payload = EventPayload {
                    request: Some(record),
                    response: Some(response_record(response)),
                    error: None,
                    elapsed_secs: Some(elapsed_secs),
                };
                self.dispatcher.dispatch(REQUEST_STOP, &payload);
            }
            Err(error) => {
                let exception = EventPayload {
                    request: Some(record.clone()),
                    response: None,
                    error: Some(ErrorRecord {
                        error_type: error_type(error).to_string(),
                    }),
                    elapsed_secs: None,
                };
                self.dispatcher.dispatch(REQUEST_EXCEPTION, &exception);

                let stop = EventPayload {
                    request: Some(record),
                    response: None,
                    error: None,
                    elapsed_secs: Some(elapsed_secs),
                };
                self.dispatcher.dispatch(REQUEST_STOP, &stop);
            }
        }

        result
    }
}

fn response_record(response: &Response) -> ResponseRecord {
    let (version_major, version_minor) = match response.version() {
        Version::HTTP_09 => (0, 9),
        Version::HTTP_10 => (1, 0),
        Version::HTTP_11 => (1, 1),
        Version::HTTP_2 => (2, 0),
        Version::HTTP_3 => (3, 0),
        _ => (0, 0),
    };
    ResponseRecord {
        version_major,
        version_minor,
        status_code: response.status().as_u16(),
    }
}

/// Stable error-kind identifier for a failed request, recorded as
/// `error.type`.
fn error_type(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connection_error"
    } else if error.is_redirect() {
        "redirect_loop"
    } else if error.is_body() || error.is_decode() {
        "body_error"
    } else if error.is_request() {
        "request_error"
    } else {
        "client_error"
    }
}
