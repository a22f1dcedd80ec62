//! The single network round trip behind [`crate::client::AuthClient`].
//!
//! [`HttpTransport`] is the reqwest-backed implementation. Tests swap in
//! their own [`Transport`] to script responses without a server.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::client::responses::AuthRequest;
use crate::errors::{AutholasError, AutholasResult};

/// Raw HTTP response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failures below the HTTP layer. Any status code, 5xx included, is a
/// [`TransportResponse`], not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `payload` as JSON to `url`.
    async fn post_json(
        &self,
        url: &str,
        payload: &AuthRequest<'_>,
    ) -> Result<TransportResponse, TransportError>;
}

/// [`Transport`] over a `reqwest::Client` with a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> AutholasResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AutholasError::HttpClientError(e.to_string()))?;
        Ok(Self { client })
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Other(e.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        payload: &AuthRequest<'_>,
    ) -> Result<TransportResponse, TransportError> {
        let resp = self.client.post(url).json(payload).send().await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(TransportResponse { status, body })
    }
}
