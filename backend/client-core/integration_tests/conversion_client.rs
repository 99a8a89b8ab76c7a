use client_core::conversion_client::ConversionClient;
use client_core::error::conversion_client::ConversionClientError;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Wire contract with the conversion service
// ============================================================================

/// **VALUE**: The configured origin, with or without trailing slash or a path
/// prefix, always resolves to `{base}/convert`.
#[test]
fn given_base_urls_when_client_built_then_endpoint_is_convert_under_base() {
    let cases = [
        ("http://localhost:8080", "http://localhost:8080/convert"),
        ("http://localhost:8080/", "http://localhost:8080/convert"),
        ("https://tools.example.com/api", "https://tools.example.com/api/convert"),
        ("https://tools.example.com/api/", "https://tools.example.com/api/convert"),
    ];

    for (base, expected) in cases {
        let client = ConversionClient::new(base).unwrap();
        assert_eq!(client.endpoint().as_str(), expected, "base {base}");
    }
}

#[test]
fn given_garbage_base_url_when_client_built_then_url_parse_error() {
    let result = ConversionClient::new("not a url");

    assert!(matches!(result, Err(ConversionClientError::UrlParse { .. })));
}

#[tokio::test]
async fn given_source_when_converted_then_posts_json_with_both_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/convert"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({"code": "<p>hi</p>"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"converted_code": "<div>hi</div>"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ConversionClient::new(&server.uri()).unwrap();

    let converted = client.convert("<p>hi</p>").await.unwrap();

    assert_eq!(converted, "<div>hi</div>");
}

#[tokio::test]
async fn given_http_500_with_error_when_converted_then_service_error_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "bad syntax"})))
        .mount(&server)
        .await;

    let client = ConversionClient::new(&server.uri()).unwrap();

    let err = client.convert("<p>").await.unwrap_err();

    match err {
        ConversionClientError::Service {
            status, message, ..
        } => {
            assert_eq!(status.0, 500);
            assert_eq!(message.as_deref(), Some("bad syntax"));
        }
        other => panic!("Expected Service error, got {other:?}"),
    }
}

/// **WHY THIS MATTERS**: Without a timeout a hung service leaves the UI in
/// "Converting..." forever.
#[tokio::test]
async fn given_slow_service_when_timeout_elapses_then_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"converted_code": "late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client =
        ConversionClient::with_timeout(&server.uri(), Duration::from_millis(200)).unwrap();

    let err = client.convert("<p>hi</p>").await.unwrap_err();

    assert!(matches!(err, ConversionClientError::Http { .. }));
}

#[tokio::test]
async fn given_unreachable_service_when_converted_then_http_error() {
    // Bind then drop a listener so the port is known to be closed.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let client = ConversionClient::new(&uri).unwrap();

    let err = client.convert("<p>hi</p>").await.unwrap_err();

    assert!(matches!(err, ConversionClientError::Http { .. }));
}
