//! System clipboard backed by `clipboard-rs`.

use client_core::error::ClipboardError;
use client_core::surface::Clipboard;

use common::ErrorLocation;

use std::panic::Location;
use std::sync::Mutex;

use clipboard_rs::{Clipboard as _, ClipboardContext};
use log::{debug, info};

/// Writes to the OS clipboard.
///
/// The context is opened on the first write and reused afterwards, since
/// each context holds platform connections for the life of the process. A
/// failed open is retried on the next write.
#[derive(Default)]
pub struct SystemClipboard {
    context: Mutex<Option<ClipboardContext>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        with_context(&self.context, open_context, |context| {
            context
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::Write {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
        })?;

        debug!("Wrote {} bytes to system clipboard", text.len());
        Ok(())
    }
}

fn open_context() -> Result<ClipboardContext, ClipboardError> {
    let context = ClipboardContext::new().map_err(|e| ClipboardError::Unavailable {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!("System clipboard opened");
    Ok(context)
}

/// Run `write` against the context cached in `slot`, opening it first if the
/// slot is empty. Only successfully opened contexts are cached.
pub(crate) fn with_context<C, T>(
    slot: &Mutex<Option<C>>,
    open: impl FnOnce() -> Result<C, ClipboardError>,
    write: impl FnOnce(&C) -> Result<T, ClipboardError>,
) -> Result<T, ClipboardError> {
    let mut guard = slot.lock().map_err(|e| ClipboardError::Unavailable {
        message: format!("Clipboard lock poisoned: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let context = match guard.take() {
        Some(context) => context,
        None => open()?,
    };

    let result = write(&context);
    *guard = Some(context);
    result
}
