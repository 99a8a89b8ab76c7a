mod conversion;
mod error_location;
mod http_status;
