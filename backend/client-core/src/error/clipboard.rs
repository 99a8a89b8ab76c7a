use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClipboardError {
    #[error("Clipboard Unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Clipboard Write Error: {message} {location}")]
    Write {
        message: String,
        location: ErrorLocation,
    },
}

impl ClipboardError {
    /// Cause without the location suffix, suitable for user-facing notices.
    pub fn message(&self) -> &str {
        match self {
            ClipboardError::Unavailable { message, .. } | ClipboardError::Write { message, .. } => {
                message
            }
        }
    }
}
