use crate::helpers::{RecordingClipboard, STATE_TIMEOUT, status_is, wait_for_state};

use client_core::controller::{ControllerHandle, ConversionController, Event, spawn_controller};
use client_core::conversion_client::ConversionClient;
use client_core::example::EXAMPLE_SOURCE;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Event dispatch through the controller actor
// ============================================================================

fn spawn_for(server: &MockServer) -> (ControllerHandle, Arc<RecordingClipboard>) {
    let clipboard = Arc::new(RecordingClipboard::default());
    let client = ConversionClient::new(&server.uri()).unwrap();
    let handle = spawn_controller(ConversionController::new(client, clipboard.clone()));
    (handle, clipboard)
}

/// **VALUE**: Full user flow: type, convert, copy.
///
/// **BUG THIS CATCHES**: Would catch the completion message never reaching the
/// actor, which leaves the UI stuck in "Converting...".
#[tokio::test]
async fn given_edit_convert_copy_events_when_dispatched_then_state_follows_each_step() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/convert"))
        .and(body_json(json!({"code": "<p>hi</p>"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"converted_code": "<div>hi</div>"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (handle, clipboard) = spawn_for(&server);
    let mut rx = handle.subscribe();

    handle
        .dispatch(Event::SourceEdited(String::from("<p>hi</p>")))
        .await
        .unwrap();
    handle.dispatch(Event::Convert).await.unwrap();

    let state = wait_for_state(&mut rx, status_is("Conversion successful!")).await;
    assert_eq!(state.output.value(), "<div>hi</div>");
    assert!(!state.converting);

    handle.dispatch(Event::CopyOutput).await.unwrap();
    wait_for_state(&mut rx, status_is("Code copied to clipboard!")).await;

    assert_eq!(clipboard.writes(), vec![String::from("<div>hi</div>")]);
}

/// **VALUE**: A rapid double click issues exactly one request.
///
/// **BUG THIS CATCHES**: Would catch removal of the single-flight guard, which
/// lets two responses race to overwrite the output.
#[tokio::test]
async fn given_convert_in_flight_when_convert_dispatched_again_then_single_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"converted_code": "<div>once</div>"}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (handle, _) = spawn_for(&server);
    let mut rx = handle.subscribe();

    handle
        .dispatch(Event::SourceEdited(String::from("<p>once</p>")))
        .await
        .unwrap();
    handle.dispatch(Event::Convert).await.unwrap();
    handle.dispatch(Event::Convert).await.unwrap();

    let busy = wait_for_state(&mut rx, |s| s.converting).await;
    assert_eq!(busy.status.unwrap().message, "Converting...");

    let done = wait_for_state(&mut rx, status_is("Conversion successful!")).await;
    assert_eq!(done.output.value(), "<div>once</div>");

    // MockServer verifies `.expect(1)` on drop.
}

/// **VALUE**: The UI stays responsive while a request is outstanding.
#[tokio::test]
async fn given_convert_in_flight_when_load_example_dispatched_then_handled_immediately() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"converted_code": "<div/>"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let (handle, _) = spawn_for(&server);
    let mut rx = handle.subscribe();

    handle
        .dispatch(Event::SourceEdited(String::from("<p/>")))
        .await
        .unwrap();
    handle.dispatch(Event::Convert).await.unwrap();
    handle.dispatch(Event::LoadExample).await.unwrap();

    let state = wait_for_state(&mut rx, status_is("Example code loaded!")).await;
    assert!(state.converting, "Conversion should still be in flight");
    assert_eq!(state.source.value(), EXAMPLE_SOURCE);

    wait_for_state(&mut rx, status_is("Conversion successful!")).await;
}

#[tokio::test]
async fn given_blank_source_when_convert_dispatched_then_no_request_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (handle, _) = spawn_for(&server);
    let mut rx = handle.subscribe();

    handle
        .dispatch(Event::SourceEdited(String::from("  \n ")))
        .await
        .unwrap();
    handle.dispatch(Event::Convert).await.unwrap();

    let state = wait_for_state(
        &mut rx,
        status_is("Please enter some React code to convert"),
    )
    .await;
    assert!(!state.converting);
}

#[tokio::test]
async fn given_service_error_when_dispatched_then_snapshot_keeps_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "bad syntax"})))
        .mount(&server)
        .await;

    let (handle, _) = spawn_for(&server);
    let mut rx = handle.subscribe();

    handle.dispatch(Event::LoadExample).await.unwrap();
    handle.dispatch(Event::Convert).await.unwrap();

    let state = wait_for_state(&mut rx, status_is("Error: bad syntax")).await;
    assert_eq!(state.output.value(), "");
    assert!(state.status.unwrap().is_error);
    assert_eq!(handle.snapshot().output.value(), "");
}

/// **VALUE**: A caller about to exit sees every queued event applied,
/// including a slow conversion.
///
/// **BUG THIS CATCHES**: Would catch `settle` returning as soon as the events
/// are queued, before the actor has handled them or the reply has arrived.
#[tokio::test]
async fn given_slow_conversion_queued_when_settled_then_result_already_applied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"converted_code": "<div>late</div>"}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (handle, _) = spawn_for(&server);

    handle.dispatch(Event::LoadExample).await.unwrap();
    handle.dispatch(Event::Convert).await.unwrap();

    let state = tokio::time::timeout(STATE_TIMEOUT, handle.settle())
        .await
        .expect("settle did not finish in time")
        .unwrap();

    assert!(!state.converting);
    assert_eq!(state.source.value(), EXAMPLE_SOURCE);
    assert_eq!(state.output.value(), "<div>late</div>");
    assert_eq!(state.status.unwrap().message, "Conversion successful!");
    assert_eq!(handle.snapshot().output.value(), "<div>late</div>");
}

#[tokio::test]
async fn given_idle_controller_when_settled_then_returns_current_state() {
    let server = MockServer::start().await;
    let (handle, _) = spawn_for(&server);

    let state = tokio::time::timeout(STATE_TIMEOUT, handle.settle())
        .await
        .expect("settle did not finish in time")
        .unwrap();

    assert!(!state.converting);
    assert!(state.status.is_none());
}
