//! Test helpers for controller integration tests.

use client_core::controller::AppState;
use client_core::error::ClipboardError;
use client_core::surface::Clipboard;

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::watch;

/// Upper bound for any single state transition in these tests.
pub const STATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Clipboard double that records every write.
#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Wait until `predicate` holds for the published state, or panic after
/// [`STATE_TIMEOUT`].
pub async fn wait_for_state(
    rx: &mut watch::Receiver<AppState>,
    predicate: impl FnMut(&AppState) -> bool,
) -> AppState {
    tokio::time::timeout(STATE_TIMEOUT, rx.wait_for(predicate))
        .await
        .expect("state did not reach expected value in time")
        .expect("controller actor stopped")
        .clone()
}

/// True once the notice message equals `message`.
pub fn status_is(message: &'static str) -> impl FnMut(&AppState) -> bool {
    move |state| {
        state
            .status
            .as_ref()
            .is_some_and(|notice| notice.message == message)
    }
}
