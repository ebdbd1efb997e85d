//! Attribute construction for recorded samples.

use opentelemetry::KeyValue;

use crate::events::facts::{RequestFacts, ResponseFacts};
use crate::metrics::classify::{status_error_type, StatusPolicy};
use crate::metrics::semconv;

/// Build the attribute set for one recorded sample.
///
/// Keys appear at most once, in a fixed order, each gated independently:
/// URI-derived keys are omitted when no URI is known, response-derived keys
/// when no response was received, and `server.port` when the port is the
/// scheme's default. Pure function; the caller appends the correlation-store
/// `error.type` for responseless requests.
pub fn build_attributes(
    request: &RequestFacts,
    response: Option<&ResponseFacts>,
    policy: &dyn StatusPolicy,
) -> Vec<KeyValue> {
    let mut attributes = Vec::with_capacity(7);

    attributes.push(KeyValue::new(
        semconv::HTTP_REQUEST_METHOD,
        request.method.clone(),
    ));

    if let Some(uri) = &request.uri {
        attributes.push(KeyValue::new(semconv::SERVER_ADDRESS, uri.host.clone()));
        attributes.push(KeyValue::new(semconv::URL_SCHEME, uri.scheme.clone()));
        if !uri.is_default_port {
            if let Some(port) = uri.port {
                attributes.push(KeyValue::new(semconv::SERVER_PORT, i64::from(port)));
            }
        }
    }

    if let Some(response) = response {
        attributes.push(KeyValue::new(
            semconv::NETWORK_PROTOCOL_VERSION,
            response.protocol_version.clone(),
        ));
        attributes.push(KeyValue::new(
            semconv::HTTP_RESPONSE_STATUS_CODE,
            i64::from(response.status_code),
        ));
        if policy.is_error(response.status_code) {
            attributes.push(KeyValue::new(
                semconv::ERROR_TYPE,
                status_error_type(response.status_code),
            ));
        }
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::facts::UriFacts;
    use crate::metrics::classify::RangeStatusPolicy;
    use url::Url;

    fn facts(method: &str, url: Option<&str>) -> RequestFacts {
        RequestFacts {
            method: method.to_string(),
            uri: url.map(|raw| UriFacts::from_url(&Url::parse(raw).unwrap()).unwrap()),
        }
    }

    fn keys(attributes: &[KeyValue]) -> Vec<&str> {
        attributes.iter().map(|kv| kv.key.as_str()).collect()
    }

    #[test]
    fn test_full_attribute_set_in_order() {
        let request = facts("GET", Some("https://example.com:8443/path"));
        let response = ResponseFacts {
            protocol_version: "1.1".into(),
            status_code: 500,
        };
        let attributes =
            build_attributes(&request, Some(&response), &RangeStatusPolicy::default());

        assert_eq!(
            attributes,
            vec![
                KeyValue::new(semconv::HTTP_REQUEST_METHOD, "GET"),
                KeyValue::new(semconv::SERVER_ADDRESS, "example.com"),
                KeyValue::new(semconv::URL_SCHEME, "https"),
                KeyValue::new(semconv::SERVER_PORT, 8443_i64),
                KeyValue::new(semconv::NETWORK_PROTOCOL_VERSION, "1.1"),
                KeyValue::new(semconv::HTTP_RESPONSE_STATUS_CODE, 500_i64),
                KeyValue::new(semconv::ERROR_TYPE, "500"),
            ]
        );
    }

    #[test]
    fn test_default_port_is_omitted() {
        let request = facts("GET", Some("https://example.com/path"));
        let attributes = build_attributes(&request, None, &RangeStatusPolicy::default());

        assert_eq!(
            keys(&attributes),
            vec![
                semconv::HTTP_REQUEST_METHOD,
                semconv::SERVER_ADDRESS,
                semconv::URL_SCHEME,
            ]
        );
    }

    #[test]
    fn test_missing_uri_omits_uri_keys() {
        let request = facts("POST", None);
        let response = ResponseFacts {
            protocol_version: "2".into(),
            status_code: 200,
        };
        let attributes =
            build_attributes(&request, Some(&response), &RangeStatusPolicy::default());

        assert_eq!(
            keys(&attributes),
            vec![
                semconv::HTTP_REQUEST_METHOD,
                semconv::NETWORK_PROTOCOL_VERSION,
                semconv::HTTP_RESPONSE_STATUS_CODE,
            ]
        );
    }

    #[test]
    fn test_success_status_has_no_error_type() {
        let request = facts("GET", Some("https://example.com/"));
        let response = ResponseFacts {
            protocol_version: "1.1".into(),
            status_code: 200,
        };
        let attributes =
            build_attributes(&request, Some(&response), &RangeStatusPolicy::default());

        assert!(!keys(&attributes).contains(&semconv::ERROR_TYPE));
        assert!(attributes
            .contains(&KeyValue::new(semconv::HTTP_RESPONSE_STATUS_CODE, 200_i64)));
    }

    #[test]
    fn test_error_statuses_carry_canonical_error_type() {
        for status in [500_u16, 503] {
            let request = facts("GET", Some("https://example.com/"));
            let response = ResponseFacts {
                protocol_version: "1.1".into(),
                status_code: status,
            };
            let attributes =
                build_attributes(&request, Some(&response), &RangeStatusPolicy::default());

            assert!(attributes
                .contains(&KeyValue::new(semconv::ERROR_TYPE, status.to_string())));
        }
    }

    #[test]
    fn test_policy_gates_error_type() {
        let policy = RangeStatusPolicy::new(vec![crate::config::StatusRange {
            start: 500,
            end: 599,
        }]);
        let request = facts("GET", None);
        let response = ResponseFacts {
            protocol_version: "1.1".into(),
            status_code: 404,
        };
        let attributes = build_attributes(&request, Some(&response), &policy);

        assert!(!keys(&attributes).contains(&semconv::ERROR_TYPE));
    }
}
