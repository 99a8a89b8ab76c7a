pub mod config;
pub mod controller;
pub mod conversion_client;
pub mod error;
pub mod example;
pub mod surface;

#[cfg(test)]
mod tests;

pub const CONVERTER_SERVICE_HOSTNAME: &str = "localhost";
pub const CONVERTER_SERVICE_PORT: u16 = 8080;
pub const CONVERTER_SERVICE_BASE_URL: &str = const_format::concatcp!(
    "http://",
    CONVERTER_SERVICE_HOSTNAME,
    ":",
    CONVERTER_SERVICE_PORT
);
