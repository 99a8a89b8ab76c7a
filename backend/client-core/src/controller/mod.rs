//! Conversion controller: owns the application state and implements the
//! user-facing operations.
//!
//! # Architecture
//!
//! [`ConversionController`] is plain state plus methods. It can be driven
//! directly (tests, scripts) or through the actor in [`actor`], which owns a
//! controller, serializes events and publishes [`AppState`] snapshots for
//! rendering.
//!
//! A conversion is split in two halves so that the network wait can happen
//! outside the controller:
//!
//! - [`ConversionController::begin_convert`] validates input, marks the
//!   controller busy and returns a [`PendingConversion`]
//! - [`PendingConversion::run`] performs the HTTP exchange
//! - [`ConversionController::finish_convert`] applies the result
//!
//! While a conversion is pending, further `begin_convert` calls fail with
//! [`OperationError::Busy`].

pub mod actor;

pub use actor::{ControllerHandle, Event, spawn_controller};

use crate::conversion_client::ConversionClient;
use crate::error::OperationError;
use crate::error::conversion_client::ConversionClientError;
use crate::example::EXAMPLE_SOURCE;
use crate::surface::{Clipboard, TextBuffer};

use common::status_notice::{
    CONVERSION_SUCCESS_MESSAGE, CONVERTING_MESSAGE, COPY_SUCCESS_MESSAGE, EMPTY_INPUT_MESSAGE,
    EXAMPLE_LOADED_MESSAGE, NOTHING_TO_COPY_MESSAGE,
};
use common::{ErrorLocation, StatusNotice};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, error, info, warn};
use uuid::Uuid;

/// Everything the UI shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub source: TextBuffer,
    pub output: TextBuffer,
    pub status: Option<StatusNotice>,
    /// A conversion request is in flight; the convert trigger is disabled.
    pub converting: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            source: TextBuffer::source(),
            output: TextBuffer::output(),
            status: None,
            converting: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated conversion request waiting to be sent.
#[derive(Debug)]
pub struct PendingConversion {
    request_id: Uuid,
    code: String,
    client: ConversionClient,
}

impl PendingConversion {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Perform the HTTP exchange.
    pub async fn run(self) -> CompletedConversion {
        debug!("[{}] Sending conversion request", self.request_id);
        let result = self.client.convert(&self.code).await;

        CompletedConversion {
            request_id: self.request_id,
            result,
        }
    }
}

/// Outcome of a [`PendingConversion`], to be applied with
/// [`ConversionController::finish_convert`].
#[derive(Debug)]
pub struct CompletedConversion {
    pub request_id: Uuid,
    pub result: Result<String, ConversionClientError>,
}

pub struct ConversionController {
    client: ConversionClient,
    clipboard: Arc<dyn Clipboard>,
    state: AppState,
}

impl ConversionController {
    pub fn new(client: ConversionClient, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            client,
            clipboard,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Replace the source buffer with user-entered text.
    pub fn edit_source(&mut self, text: impl Into<String>) {
        self.state.source.user_edit(text);
    }

    /// Validate the source buffer and reserve the single in-flight slot.
    ///
    /// On success the status becomes "Converting..." and the returned
    /// request must be run and handed back to [`Self::finish_convert`].
    pub fn begin_convert(&mut self) -> Result<PendingConversion, OperationError> {
        if self.state.converting {
            debug!("Convert ignored: a conversion is already in flight");
            return Err(OperationError::Busy {
                message: String::from("Conversion already in flight"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.state.source.is_blank() {
            return Err(self.fail(OperationError::EmptyInput {
                message: String::from(EMPTY_INPUT_MESSAGE),
                location: ErrorLocation::from(Location::caller()),
            }));
        }

        let pending = PendingConversion {
            request_id: Uuid::new_v4(),
            code: self.state.source.value().to_string(),
            client: self.client.clone(),
        };

        info!(
            "[{}] Converting {} bytes via {}",
            pending.request_id,
            pending.code.len(),
            self.client.endpoint()
        );

        self.state.converting = true;
        self.notify(StatusNotice::info(CONVERTING_MESSAGE));

        Ok(pending)
    }

    /// Apply the outcome of a conversion and release the in-flight slot.
    pub fn finish_convert(
        &mut self,
        completed: CompletedConversion,
    ) -> Result<(), OperationError> {
        self.state.converting = false;
        let request_id = completed.request_id;

        match completed.result {
            Ok(converted_code) => {
                info!(
                    "[{request_id}] Conversion succeeded ({} bytes)",
                    converted_code.len()
                );
                self.state.output.set_value(converted_code);
                self.notify(StatusNotice::info(CONVERSION_SUCCESS_MESSAGE));
                Ok(())
            }
            Err(ConversionClientError::Service {
                status, message, ..
            }) => {
                warn!("[{request_id}] Conversion rejected with HTTP {status}");
                Err(self.fail(OperationError::Service {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                }))
            }
            Err(e) => {
                error!("[{request_id}] Conversion error: {e}");
                Err(self.fail(OperationError::Transport {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }))
            }
        }
    }

    /// Convert the source buffer and wait for the result.
    pub async fn convert(&mut self) -> Result<(), OperationError> {
        let pending = self.begin_convert()?;
        let completed = pending.run().await;
        self.finish_convert(completed)
    }

    /// Copy the output buffer to the clipboard.
    pub fn copy_output(&mut self) -> Result<(), OperationError> {
        if self.state.output.is_blank() {
            return Err(self.fail(OperationError::NothingToCopy {
                message: String::from(NOTHING_TO_COPY_MESSAGE),
                location: ErrorLocation::from(Location::caller()),
            }));
        }

        match self.clipboard.write_text(self.state.output.value()) {
            Ok(()) => {
                debug!(
                    "Copied {} bytes to clipboard",
                    self.state.output.value().len()
                );
                self.notify(StatusNotice::info(COPY_SUCCESS_MESSAGE));
                Ok(())
            }
            Err(e) => {
                error!("Clipboard write failed: {e}");
                Err(self.fail(OperationError::Clipboard {
                    message: e.message().to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }))
            }
        }
    }

    /// Overwrite the source buffer with the sample component.
    pub fn load_example(&mut self) {
        self.state.source.set_value(EXAMPLE_SOURCE);
        self.notify(StatusNotice::info(EXAMPLE_LOADED_MESSAGE));
    }

    fn notify(&mut self, notice: StatusNotice) {
        if notice.is_error {
            debug!("Status (error): {}", notice.message);
        } else {
            debug!("Status: {}", notice.message);
        }
        self.state.status = Some(notice);
    }

    /// Surface `error` as the current notice and hand it back to the caller.
    fn fail(&mut self, error: OperationError) -> OperationError {
        if let Some(notice) = error.status_notice() {
            self.notify(notice);
        }
        error
    }
}
