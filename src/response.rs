use crate::error::SearchError;
use log::debug;
use serde_json::Value;

/// A response already produced by the HTTP client.
///
/// The interpreter only needs the status code and, for successful calls, the
/// JSON body. Implementations should decode the body lazily since error
/// responses are never decoded.
pub trait ApiResponse {
    fn status_code(&self) -> u16;
    fn body(&self) -> Result<Value, SearchError>;
}

/// Owned status and body text of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        RawResponse {
            status,
            body: body.into(),
        }
    }

    pub fn from_json(status: u16, body: &Value) -> Self {
        RawResponse::new(status, body.to_string())
    }

    /// Capture a response returned by an async `reqwest` client
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self, SearchError> {
        let status = response.status().as_u16();
        debug!("Reading response body from {} ({})", response.url(), status);
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }

    /// Capture a response returned by a blocking `reqwest` client
    pub fn from_blocking(response: reqwest::blocking::Response) -> Result<Self, SearchError> {
        let status = response.status().as_u16();
        debug!("Reading response body from {} ({})", response.url(), status);
        let body = response.text()?;
        Ok(RawResponse { status, body })
    }

    pub fn text(&self) -> &str {
        &self.body
    }
}

impl ApiResponse for RawResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn body(&self) -> Result<Value, SearchError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
