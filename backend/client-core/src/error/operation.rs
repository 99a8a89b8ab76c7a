use common::status_notice::{
    EMPTY_INPUT_MESSAGE, NOTHING_TO_COPY_MESSAGE, TRANSPORT_ERROR_MESSAGE,
};
use common::{ErrorLocation, StatusNotice};

use thiserror::Error as ThisError;

/// Failures of the user-facing operations (convert, copy).
///
/// Every variant is recovered where it happens; the controller turns it into
/// a [`StatusNotice`] and keeps running.
#[derive(Debug, ThisError)]
pub enum OperationError {
    /// Source buffer was empty after trimming. No request was sent.
    #[error("Empty Input Error: {message} {location}")]
    EmptyInput {
        message: String,
        location: ErrorLocation,
    },

    /// A conversion is already in flight; the trigger is disabled.
    #[error("Busy Error: {message} {location}")]
    Busy {
        message: String,
        location: ErrorLocation,
    },

    /// Network, timeout or undecodable reply.
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    /// The service reported a failure. `message` is its `error` field.
    #[error("Service Error: {} {location}", .message.as_deref().unwrap_or("<no message>"))]
    Service {
        message: Option<String>,
        location: ErrorLocation,
    },

    /// Output buffer was empty after trimming. Clipboard not touched.
    #[error("Nothing To Copy Error: {message} {location}")]
    NothingToCopy {
        message: String,
        location: ErrorLocation,
    },

    #[error("Clipboard Error: {message} {location}")]
    Clipboard {
        message: String,
        location: ErrorLocation,
    },
}

impl OperationError {
    /// Notice to show for this failure. `Busy` is silent.
    pub fn status_notice(&self) -> Option<StatusNotice> {
        match self {
            OperationError::EmptyInput { .. } => Some(StatusNotice::error(EMPTY_INPUT_MESSAGE)),
            OperationError::Busy { .. } => None,
            OperationError::Transport { .. } => Some(StatusNotice::error(TRANSPORT_ERROR_MESSAGE)),
            OperationError::Service { message, .. } => {
                Some(StatusNotice::service_error(message.as_deref()))
            }
            OperationError::NothingToCopy { .. } => {
                Some(StatusNotice::error(NOTHING_TO_COPY_MESSAGE))
            }
            OperationError::Clipboard { message, .. } => {
                Some(StatusNotice::clipboard_error(message))
            }
        }
    }
}
