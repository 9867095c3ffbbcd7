//! Core `NlpClient` trait and `HttpNlpClient` implementation.
//!
//! `HttpNlpClient` issues a single `GET {base_url}/nlp/process/?text=…`
//! request per call.  The base address comes from [`EndpointConfig`] and is
//! resolved once at construction; nothing is re-read per request.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::EndpointConfig;
use crate::nlp::response::NlpResponse;

// ---------------------------------------------------------------------------
// NlpError
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to the NLP service.
#[derive(Debug, Error)]
pub enum NlpError {
    /// HTTP transport or connection error, or a non-2xx status.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The HTTP response body could not be decoded as the expected JSON.
    #[error("failed to parse NLP response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for NlpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            NlpError::Parse(e.to_string())
        } else {
            NlpError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// NlpClient trait
// ---------------------------------------------------------------------------

/// Async trait for NLP text processing.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn NlpClient>`).
#[async_trait]
pub trait NlpClient: Send + Sync {
    /// Submit `text` and return the decoded response document.
    ///
    /// The text is sent verbatim (untrimmed); URL encoding is the client's
    /// responsibility.
    async fn process(&self, text: &str) -> Result<NlpResponse, NlpError>;
}

// ---------------------------------------------------------------------------
// HttpNlpClient
// ---------------------------------------------------------------------------

/// Calls the remote `/nlp/process/` endpoint over HTTP.
///
/// No timeout is configured: a slow remote call simply delays settlement.
/// The caller guards against overlapping submissions by disabling its
/// triggering control while a request is in flight.
pub struct HttpNlpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNlpClient {
    /// Build an `HttpNlpClient` from endpoint config.
    ///
    /// A default client is used as a last-resort fallback if the builder
    /// fails (should never happen in practice).
    pub fn from_config(config: &EndpointConfig) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the request for `text` without sending it.
    ///
    /// Exposed at crate level so tests can assert on the URL encoding.
    pub(crate) fn build_request(&self, text: &str) -> Result<reqwest::Request, NlpError> {
        let url = format!("{}/nlp/process/", self.base_url);
        let request = self
            .client
            .get(&url)
            .query(&[("text", text)])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl NlpClient for HttpNlpClient {
    /// Issue the GET request and decode the JSON body.
    ///
    /// A non-2xx status is a transport-level failure ([`NlpError::Request`]);
    /// an undecodable body is [`NlpError::Parse`].
    async fn process(&self, text: &str) -> Result<NlpResponse, NlpError> {
        let request = self.build_request(text)?;

        log::debug!("nlp: GET {}", request.url());

        let response = self.client.execute(request).await?;
        let response = response
            .error_for_status()
            .map_err(|e| NlpError::Request(e.to_string()))?;

        let decoded: NlpResponse = response
            .json()
            .await
            .map_err(|e| NlpError::Parse(e.to_string()))?;

        Ok(decoded)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
