use crate::error::conversion_client::ConversionClientError;

use common::{ConversionRequest, ConversionResponse, ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const CONVERT_ENDPOINT: &str = "convert";
const APPLICATION_JSON: &str = "application/json";

/// HTTP client for the conversion service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ConversionClient {
    endpoint: Url,
    client: Client,
}

impl ConversionClient {
    pub fn new(base_url_str: &str) -> Result<Self, ConversionClientError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(
        base_url_str: &str,
        timeout: Duration,
    ) -> Result<Self, ConversionClientError> {
        let endpoint = endpoint_url(base_url_str)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { endpoint, client })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit `code` for conversion and return the converted text verbatim.
    ///
    /// # Errors
    ///
    /// - [`ConversionClientError::Service`] for a non-2xx reply, carrying the
    ///   reply's `error` field when present.
    /// - [`ConversionClientError::Http`] when the request cannot be sent or
    ///   times out.
    /// - [`ConversionClientError::Json`] when the reply is not JSON, or a 2xx
    ///   reply lacks `converted_code`.
    pub async fn convert(&self, code: &str) -> Result<String, ConversionClientError> {
        let request = ConversionRequest::new(code);

        debug!("POST {} ({} bytes)", self.endpoint, request.code.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .json(&request)
            .send()
            .await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        let body = response.text().await?;
        let reply: ConversionResponse = serde_json::from_str(&body)?;

        if !status.is_success() {
            if status.is_server_error() {
                warn!("Conversion service failed with HTTP {status}");
            } else if status.is_client_error() {
                debug!("Conversion service rejected request with HTTP {status}");
            } else {
                warn!("Unexpected HTTP {status} from conversion service");
            }
            return Err(ConversionClientError::Service {
                status,
                message: reply.error,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        reply
            .converted_code
            .ok_or_else(|| ConversionClientError::Json {
                message: format!("HTTP {status} reply is missing `converted_code`"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// `{base}/convert`, tolerating a base URL with or without a trailing slash.
#[track_caller]
fn endpoint_url(base_url_str: &str) -> Result<Url, ConversionClientError> {
    let mut base_url = Url::parse(base_url_str)?;
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    Ok(base_url.join(CONVERT_ENDPOINT)?)
}
