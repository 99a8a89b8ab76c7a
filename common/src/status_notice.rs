//! Single-slot status message shown to the user after each operation.

use serde::Serialize;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some React code to convert";
pub const CONVERTING_MESSAGE: &str = "Converting...";
pub const CONVERSION_SUCCESS_MESSAGE: &str = "Conversion successful!";
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error converting code. Check console for details.";
pub const UNKNOWN_SERVICE_ERROR: &str = "Unknown error occurred";
pub const NOTHING_TO_COPY_MESSAGE: &str = "No converted code to copy";
pub const COPY_SUCCESS_MESSAGE: &str = "Code copied to clipboard!";
pub const EXAMPLE_LOADED_MESSAGE: &str = "Example code loaded!";

const SERVICE_ERROR_PREFIX: &str = "Error: ";
const CLIPBOARD_ERROR_PREFIX: &str = "Failed to copy code: ";

/// Colours a renderer should use for a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

const ERROR_STYLE: NoticeStyle = NoticeStyle {
    background: "#fee2e2",
    foreground: "#991b1b",
};

const SUCCESS_STYLE: NoticeStyle = NoticeStyle {
    background: "#dcfce7",
    foreground: "#166534",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusNotice {
    pub message: String,
    pub is_error: bool,
}

impl StatusNotice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }

    /// `"Error: <message>"`, falling back to [`UNKNOWN_SERVICE_ERROR`] when the
    /// service did not say what went wrong.
    pub fn service_error(message: Option<&str>) -> Self {
        Self::error(format!(
            "{SERVICE_ERROR_PREFIX}{}",
            message.unwrap_or(UNKNOWN_SERVICE_ERROR)
        ))
    }

    pub fn clipboard_error(message: &str) -> Self {
        Self::error(format!("{CLIPBOARD_ERROR_PREFIX}{message}"))
    }

    pub fn style(&self) -> NoticeStyle {
        if self.is_error {
            ERROR_STYLE
        } else {
            SUCCESS_STYLE
        }
    }
}
