// Library exports for testing
// The binary (main.rs) imports these as well

pub mod clipboard;
pub mod command;
pub mod error;
pub mod logger;
pub mod shell;
pub mod view;

#[cfg(test)]
mod tests;

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "webflow-converter";
