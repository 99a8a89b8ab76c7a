pub mod clipboard;
pub mod config;
pub mod controller;
pub mod conversion_client;
pub mod operation;

pub use clipboard::ClipboardError;
pub use config::ConfigError;
pub use controller::ControllerError;
pub use conversion_client::ConversionClientError;
pub use operation::OperationError;
