use common::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors that abort the terminal front-end.
///
/// Operation failures (empty input, service errors, ...) never reach this
/// type; the controller reports them as status notices.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ConverterError {
    /// Error from this App (logger, terminal I/O, directories)
    #[error("Converter Error: {message} {location}")]
    Converter {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations (client construction, dispatch)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },
}
