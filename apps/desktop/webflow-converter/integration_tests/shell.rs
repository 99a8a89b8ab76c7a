use client_core::config::UiPreferences;
use client_core::controller::{AppState, ControllerHandle, ConversionController, spawn_controller};
use client_core::conversion_client::ConversionClient;
use client_core::error::ClipboardError;
use client_core::example::EXAMPLE_SOURCE;
use client_core::surface::Clipboard;

use webflow_converter::shell;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tempfile::NamedTempFile;
use tokio::sync::watch;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for the terminal front-end driving a real controller
// These feed scripted input through shell::run and observe published state
// ============================================================================

#[derive(Default)]
struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn spawn_for(server: &MockServer) -> (ControllerHandle, Arc<RecordingClipboard>) {
    let clipboard = Arc::new(RecordingClipboard::default());
    let client = ConversionClient::new(&server.uri()).unwrap();
    let handle = spawn_controller(ConversionController::new(client, clipboard.clone()));
    (handle, clipboard)
}

async fn wait_for_status(rx: &mut watch::Receiver<AppState>, message: &str) -> AppState {
    tokio::time::timeout(
        Duration::from_secs(5),
        rx.wait_for(|state| {
            state
                .status
                .as_ref()
                .is_some_and(|notice| notice.message == message)
        }),
    )
    .await
    .expect("status did not appear in time")
    .expect("controller actor stopped")
    .clone()
}

/// **VALUE**: `load` followed by `convert` sends the file contents and shows the result.
///
/// **BUG THIS CATCHES**: Would catch `load` dispatching the path instead of the
/// file contents, or the shell dropping the convert event.
#[tokio::test]
async fn given_load_and_convert_script_when_run_then_output_holds_converted_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/convert"))
        .and(body_json(json!({"code": "<p>hi</p>\n"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"converted_code": "<div>hi</div>"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "<p>hi</p>\n").unwrap();
    let script = format!("load {}\nconvert\n", file.path().display());

    let (handle, _) = spawn_for(&server);
    let mut rx = handle.subscribe();

    shell::run(script.as_bytes(), &handle, &UiPreferences::default(), false)
        .await
        .unwrap();

    let state = wait_for_status(&mut rx, "Conversion successful!").await;
    assert_eq!(state.output.value(), "<div>hi</div>");
}

/// **VALUE**: Piped input (`printf 'example\nconvert\n' | webflow-converter`)
/// still converts: `run` only returns once the conversion is applied.
///
/// **BUG THIS CATCHES**: Would catch `run` returning while events are merely
/// queued, after which the binary exits and the work is lost.
#[tokio::test]
async fn given_script_ending_after_convert_when_run_returns_then_result_applied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"converted_code": "<div>done</div>"}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (handle, _) = spawn_for(&server);

    shell::run(
        "example\nconvert\n".as_bytes(),
        &handle,
        &UiPreferences::default(),
        false,
    )
    .await
    .unwrap();

    let state = handle.snapshot();
    assert!(!state.converting);
    assert_eq!(state.source.value(), EXAMPLE_SOURCE);
    assert_eq!(state.output.value(), "<div>done</div>");
    assert_eq!(
        state.status.map(|notice| notice.message),
        Some(String::from("Conversion successful!"))
    );
}

#[tokio::test]
async fn given_quit_right_after_convert_when_run_returns_then_result_applied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": "bad syntax"}))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let (handle, _) = spawn_for(&server);

    shell::run(
        "example\nconvert\nquit\n".as_bytes(),
        &handle,
        &UiPreferences::default(),
        false,
    )
    .await
    .unwrap();

    let state = handle.snapshot();
    assert!(!state.converting);
    assert_eq!(state.output.value(), "");
    assert_eq!(
        state.status.map(|notice| notice.message),
        Some(String::from("Error: bad syntax"))
    );
}

#[tokio::test]
async fn given_paste_block_when_run_then_source_is_pasted_text() {
    let server = MockServer::start().await;
    let (handle, _) = spawn_for(&server);
    let mut rx = handle.subscribe();

    let script = "paste\n<div>\n  <p>hi</p>\n</div>\n.\n";

    shell::run(script.as_bytes(), &handle, &UiPreferences::default(), false)
        .await
        .unwrap();

    let state = tokio::time::timeout(
        Duration::from_secs(5),
        rx.wait_for(|state| !state.source.value().is_empty()),
    )
    .await
    .unwrap()
    .unwrap()
    .clone();
    assert_eq!(state.source.value(), "<div>\n  <p>hi</p>\n</div>");
}

/// **VALUE**: Commands after `quit` are never dispatched, and unknown commands
/// don't stop the shell.
#[tokio::test]
async fn given_quit_in_script_when_run_then_later_commands_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (handle, _) = spawn_for(&server);
    let mut rx = handle.subscribe();

    let script = "bogus\nexample\nquit\nconvert\n";

    shell::run(script.as_bytes(), &handle, &UiPreferences::default(), false)
        .await
        .unwrap();

    let state = wait_for_status(&mut rx, "Example code loaded!").await;
    assert_eq!(state.source.value(), EXAMPLE_SOURCE);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!handle.snapshot().converting);
}

#[tokio::test]
async fn given_copy_before_convert_when_run_then_nothing_to_copy() {
    let server = MockServer::start().await;
    let (handle, clipboard) = spawn_for(&server);
    let mut rx = handle.subscribe();

    shell::run("copy\n".as_bytes(), &handle, &UiPreferences::default(), false)
        .await
        .unwrap();

    let state = wait_for_status(&mut rx, "No converted code to copy").await;
    assert!(state.status.unwrap().is_error);
    assert!(clipboard.writes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_missing_file_when_loaded_then_shell_continues() {
    let server = MockServer::start().await;
    let (handle, _) = spawn_for(&server);
    let mut rx = handle.subscribe();

    let script = "load /definitely/not/here.jsx\nexample\n";

    shell::run(script.as_bytes(), &handle, &UiPreferences::default(), false)
        .await
        .unwrap();

    wait_for_status(&mut rx, "Example code loaded!").await;
}
