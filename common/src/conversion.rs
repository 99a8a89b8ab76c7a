//! Wire types exchanged with the conversion service.

use serde::{Deserialize, Serialize};

/// Body of `POST /convert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub code: String,
}

impl ConversionRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Body returned by `POST /convert`.
///
/// Success replies carry `converted_code`, failure replies carry `error`.
/// Both are optional on the wire; the HTTP status decides which one matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
