mod controller;
mod operation_error;

use crate::error::ClipboardError;
use crate::surface::Clipboard;

use common::ErrorLocation;

use std::panic::Location;
use std::sync::Mutex;

/// Clipboard double that records writes, or fails every write when built
/// with [`RecordingClipboard::failing`].
#[derive(Default)]
pub(crate) struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    failure: Option<String>,
}

impl RecordingClipboard {
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub(crate) fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        match &self.failure {
            Some(message) => Err(ClipboardError::Write {
                message: message.clone(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }
}
