// Unit tests for ConversionController operations
// HTTP is served by wiremock; the clipboard is a recording double

use super::RecordingClipboard;
use crate::controller::ConversionController;
use crate::conversion_client::ConversionClient;
use crate::error::OperationError;
use crate::example::EXAMPLE_SOURCE;

use common::StatusNotice;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller_for(server: &MockServer) -> (ConversionController, Arc<RecordingClipboard>) {
    let clipboard = Arc::new(RecordingClipboard::default());
    let client = ConversionClient::new(&server.uri()).unwrap();
    (
        ConversionController::new(client, clipboard.clone()),
        clipboard,
    )
}

fn status(controller: &ConversionController) -> StatusNotice {
    controller.state().status.clone().expect("a status notice")
}

/// **VALUE**: Blank input must never reach the network.
///
/// **BUG THIS CATCHES**: Would catch validation on the untrimmed text, which lets
/// whitespace-only input through as a request.
#[tokio::test]
async fn given_blank_source_when_convert_then_no_request_and_empty_input_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (mut controller, _) = controller_for(&server);

    for blank in ["", "   ", "\n\t \r\n"] {
        controller.edit_source(blank);
        let result = controller.convert().await;

        assert!(matches!(result, Err(OperationError::EmptyInput { .. })));
        assert_eq!(
            status(&controller),
            StatusNotice::error("Please enter some React code to convert")
        );
        assert!(!controller.state().converting);
    }
}

#[tokio::test]
async fn given_valid_source_when_service_succeeds_then_output_set_and_success_notice() {
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

    let (mut controller, _) = controller_for(&server);
    controller.edit_source("<p>hi</p>");

    controller.convert().await.unwrap();

    assert_eq!(controller.state().output.value(), "<div>hi</div>");
    assert_eq!(status(&controller), StatusNotice::info("Conversion successful!"));
    assert!(!controller.state().converting);
}

/// **WHY THIS MATTERS**: Converted markup is shown exactly as the service sent it.
#[tokio::test]
async fn given_converted_code_with_whitespace_when_applied_then_kept_verbatim() {
    let server = MockServer::start().await;
    let converted = "\n  <div class=\"a\">\n    hi\n  </div>\n\n";
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"converted_code": converted})))
        .mount(&server)
        .await;

    let (mut controller, _) = controller_for(&server);
    controller.edit_source("  <p>hi</p>  ");

    controller.convert().await.unwrap();

    assert_eq!(controller.state().output.value(), converted);
}

#[tokio::test]
async fn given_prior_output_when_service_fails_then_output_unchanged_and_error_shown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"converted_code": "<div>old</div>"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "bad syntax"})))
        .mount(&server)
        .await;

    let (mut controller, _) = controller_for(&server);
    controller.edit_source("<p>old</p>");
    controller.convert().await.unwrap();

    controller.edit_source("<p>broken");
    let result = controller.convert().await;

    assert!(matches!(
        result,
        Err(OperationError::Service { message: Some(ref m), .. }) if m == "bad syntax"
    ));
    assert_eq!(controller.state().output.value(), "<div>old</div>");
    assert_eq!(status(&controller), StatusNotice::error("Error: bad syntax"));
}

#[tokio::test]
async fn given_failure_without_error_field_when_convert_then_unknown_error_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({})))
        .mount(&server)
        .await;

    let (mut controller, _) = controller_for(&server);
    controller.edit_source("<p>hi</p>");

    let result = controller.convert().await;

    assert!(matches!(result, Err(OperationError::Service { message: None, .. })));
    assert_eq!(
        status(&controller).message,
        "Error: Unknown error occurred"
    );
}

#[tokio::test]
async fn given_non_json_reply_when_convert_then_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let (mut controller, _) = controller_for(&server);
    controller.edit_source("<p>hi</p>");

    let result = controller.convert().await;

    assert!(matches!(result, Err(OperationError::Transport { .. })));
    assert_eq!(
        status(&controller),
        StatusNotice::error("Error converting code. Check console for details.")
    );
    assert_eq!(controller.state().output.value(), "");
}

/// **BUG THIS CATCHES**: Would catch the output being cleared when the reply
/// cannot be read, losing the last good conversion.
#[tokio::test]
async fn given_prior_output_when_reply_unreadable_then_output_unchanged_and_transport_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"converted_code": "<div>old</div>"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (mut controller, _) = controller_for(&server);
    controller.edit_source("<p>old</p>");
    controller.convert().await.unwrap();

    controller.edit_source("<p>new</p>");
    let result = controller.convert().await;

    assert!(matches!(result, Err(OperationError::Transport { .. })));
    assert_eq!(controller.state().output.value(), "<div>old</div>");
    assert_eq!(
        status(&controller),
        StatusNotice::error("Error converting code. Check console for details.")
    );
    assert!(!controller.state().converting);
}

/// **BUG THIS CATCHES**: Would catch writing an empty or "undefined" value into
/// the output when a 2xx reply forgets `converted_code`.
#[tokio::test]
async fn given_success_status_without_converted_code_when_convert_then_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "x"})))
        .mount(&server)
        .await;

    let (mut controller, _) = controller_for(&server);
    controller.edit_source("<p>hi</p>");

    let result = controller.convert().await;

    assert!(matches!(result, Err(OperationError::Transport { .. })));
    assert_eq!(controller.state().output.value(), "");
}

/// **VALUE**: The convert trigger is disabled while a request is in flight.
#[tokio::test]
async fn given_conversion_in_flight_when_begin_again_then_busy_and_status_unchanged() {
    let server = MockServer::start().await;
    let (mut controller, _) = controller_for(&server);
    controller.edit_source("<p>hi</p>");

    let pending = controller.begin_convert().unwrap();
    assert!(controller.state().converting);
    assert_eq!(status(&controller), StatusNotice::info("Converting..."));

    let second = controller.begin_convert();

    assert!(matches!(second, Err(OperationError::Busy { .. })));
    assert_eq!(status(&controller), StatusNotice::info("Converting..."));
    assert_eq!(pending.code(), "<p>hi</p>");
}

#[tokio::test]
async fn given_empty_output_when_copy_then_clipboard_never_invoked() {
    let server = MockServer::start().await;
    let (mut controller, clipboard) = controller_for(&server);

    let result = controller.copy_output();

    assert!(matches!(result, Err(OperationError::NothingToCopy { .. })));
    assert!(clipboard.writes().is_empty());
    assert_eq!(
        status(&controller),
        StatusNotice::error("No converted code to copy")
    );
}

#[tokio::test]
async fn given_output_when_copy_then_clipboard_receives_exact_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"converted_code": "<div>hi</div>\n"})))
        .mount(&server)
        .await;
    let (mut controller, clipboard) = controller_for(&server);
    controller.edit_source("<p>hi</p>");
    controller.convert().await.unwrap();

    controller.copy_output().unwrap();

    assert_eq!(clipboard.writes(), vec![String::from("<div>hi</div>\n")]);
    assert_eq!(
        status(&controller),
        StatusNotice::info("Code copied to clipboard!")
    );
}

#[tokio::test]
async fn given_failing_clipboard_when_copy_then_clipboard_error_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"converted_code": "<div/>"})))
        .mount(&server)
        .await;
    let clipboard = Arc::new(RecordingClipboard::failing("no display"));
    let client = ConversionClient::new(&server.uri()).unwrap();
    let mut controller = ConversionController::new(client, clipboard);
    controller.edit_source("<p/>");
    controller.convert().await.unwrap();

    let result = controller.copy_output();

    assert!(matches!(result, Err(OperationError::Clipboard { .. })));
    assert_eq!(
        status(&controller),
        StatusNotice::error("Failed to copy code: no display")
    );
}

#[tokio::test]
async fn given_example_loaded_twice_when_compared_then_same_as_once() {
    let server = MockServer::start().await;
    let (mut controller, _) = controller_for(&server);
    controller.edit_source("something else");

    controller.load_example();
    let once = controller.state().clone();
    controller.load_example();

    assert_eq!(controller.state(), &once);
    assert_eq!(controller.state().source.value(), EXAMPLE_SOURCE);
    assert_eq!(status(&controller), StatusNotice::info("Example code loaded!"));
}
