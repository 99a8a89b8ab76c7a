use crate::{ConversionRequest, ConversionResponse};

use serde_json::json;

/// **VALUE**: The request body must be exactly `{"code": ...}` for the service to accept it.
#[test]
fn given_request_when_serialized_then_matches_wire_shape() {
    let request = ConversionRequest::new("<p>hi</p>");

    let body = serde_json::to_string(&request).unwrap();

    assert_eq!(body, r#"{"code":"<p>hi</p>"}"#);
}

#[test]
fn given_success_body_when_deserialized_then_only_converted_code_is_set() {
    let response: ConversionResponse =
        serde_json::from_value(json!({"converted_code": "<div>hi</div>"})).unwrap();

    assert_eq!(response.converted_code.as_deref(), Some("<div>hi</div>"));
    assert_eq!(response.error, None);
}

/// **WHY THIS MATTERS**: Failure bodies may omit `error`; decoding must still
/// succeed so the caller can substitute the default message.
#[test]
fn given_empty_object_when_deserialized_then_both_fields_absent() {
    let response: ConversionResponse = serde_json::from_str("{}").unwrap();

    assert_eq!(response, ConversionResponse::default());
}

#[test]
fn given_unknown_fields_when_deserialized_then_ignored() {
    let response: ConversionResponse =
        serde_json::from_value(json!({"error": "bad syntax", "trace": [1, 2]})).unwrap();

    assert_eq!(response.error.as_deref(), Some("bad syntax"));
}
