use tracing::{debug, info, warn};

use crate::client::responses::{
    AuthRequest, AuthResult, Credentials, FailureKind, ServerAuthResponse,
};
use crate::client::transport::{HttpTransport, Transport, TransportError, TransportResponse};
use crate::config::ApiConfig;
use crate::errors::AutholasResult;

/// Client for the Autholas login endpoint.
///
/// Holds no per-call state; `authenticate` can be called any number of
/// times and each call performs exactly one request.
pub struct AuthClient {
    config: ApiConfig,
    transport: Box<dyn Transport>,
}

impl AuthClient {
    /// Create a client that talks HTTP using `config.timeout()`.
    pub fn new(config: ApiConfig) -> AutholasResult<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over a caller-supplied transport.
    pub fn with_transport(config: ApiConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Box::new(transport),
        }
    }

    /// Log in and classify the outcome.
    ///
    /// Never returns an error: connection failures, timeouts, failure bodies
    /// and malformed responses all come back as [`AuthResult::Failure`].
    pub async fn authenticate(&self, credentials: &Credentials) -> AuthResult {
        let payload = AuthRequest {
            api_key: &self.config.key,
            username: &credentials.username,
            password: &credentials.password,
            hwid: &credentials.device_id,
            device_name: &self.config.device_name,
        };

        info!(username = %credentials.username, url = %self.config.url, "Authenticating");

        let result = match self.transport.post_json(&self.config.url, &payload).await {
            Ok(response) => classify_response(response),
            Err(err) => classify_transport_error(err),
        };

        match &result {
            AuthResult::Success { .. } => {
                info!(username = %credentials.username, "Login succeeded");
            }
            AuthResult::Failure {
                kind,
                error_code,
                message,
            } => {
                warn!(
                    ?kind,
                    error_code = error_code.as_ref().map(|c| c.as_str()).unwrap_or("-"),
                    %message,
                    "Login failed"
                );
            }
        }

        result
    }
}

/// Classify an HTTP response. The body alone decides the outcome: 4xx and
/// 5xx responses with a structured body are read like any other.
fn classify_response(response: TransportResponse) -> AuthResult {
    debug!(status = response.status, "Received login response");

    match serde_json::from_str::<ServerAuthResponse>(&response.body) {
        Ok(body) => body.into_result(),
        Err(e) => AuthResult::failure(
            FailureKind::Unexpected,
            format!(
                "Failed to parse login response (HTTP {}): {e}",
                response.status
            ),
        ),
    }
}

fn classify_transport_error(err: TransportError) -> AuthResult {
    match err {
        TransportError::Connect(detail) => {
            debug!(%detail, "Connection to authentication server failed");
            AuthResult::failure(
                FailureKind::Transport,
                "Unable to reach authentication server.",
            )
        }
        TransportError::Timeout => AuthResult::failure(
            FailureKind::Timeout,
            "Server is taking too long to respond.",
        ),
        TransportError::Other(message) => AuthResult::failure(FailureKind::Unexpected, message),
    }
}
