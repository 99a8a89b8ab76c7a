use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ConversionClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// The service answered with a non-2xx status. `message` is the `error`
    /// field of the reply, if it had one.
    #[error("Service Error: HTTP {status} - {} {location}", .message.as_deref().unwrap_or("<no message>"))]
    Service {
        status: HttpStatusCode,
        message: Option<String>,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for ConversionClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ConversionClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ConversionClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ConversionClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ConversionClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ConversionClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
