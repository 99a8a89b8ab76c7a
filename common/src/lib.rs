//! Domain models for the Webflow converter.
//!
//! This crate contains pure data structures representing the core
//! concepts in our application. Models have no business logic - they're
//! just data that can be passed between layers.
//!
//! ## Architecture
//!
//! - **common** (this crate): Pure data structures
//! - **client-core**: Business logic operating on models
//! - **webflow-converter**: Application wiring everything together

pub mod conversion;
pub mod error;
pub mod http_status;
pub mod status_notice;

#[cfg(test)]
mod tests;

pub use conversion::{ConversionRequest, ConversionResponse};
pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
pub use status_notice::{NoticeStyle, StatusNotice};
