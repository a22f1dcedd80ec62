//! Request and response types for the Autholas login endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::client::errors::{classify, AuthErrorCode, ErrorCategory, UNKNOWN_CODE};

/// What the user supplies (plus the derived HWID) for one login attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Device fingerprint, see [`crate::hardware::compute_fingerprint`]
    pub device_id: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        device_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            device_id: device_id.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("device_id", &self.device_id)
            .finish()
    }
}

/// JSON body posted to the login endpoint.
#[derive(Serialize)]
pub struct AuthRequest<'a> {
    pub api_key: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub hwid: &'a str,
    pub device_name: &'a str,
}

impl fmt::Debug for AuthRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("username", &self.username)
            .field("hwid", &self.hwid)
            .field("device_name", &self.device_name)
            .finish_non_exhaustive()
    }
}

/// Which stage of a login attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Server unreachable (connection refused, DNS failure)
    Transport,
    /// No response within the configured timeout
    Timeout,
    /// The server answered with a structured failure body
    Application,
    /// Anything else: malformed body, unexpected client error
    Unexpected,
}

/// Outcome of one login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Success {
        session_token: String,
        /// Subscription expiry as reported by the server, for display only
        expires_at: Option<String>,
    },
    Failure {
        kind: FailureKind,
        /// Present only for [`FailureKind::Application`]
        error_code: Option<AuthErrorCode>,
        message: String,
    },
}

impl AuthResult {
    pub(crate) fn application(error_code: AuthErrorCode, message: impl Into<String>) -> Self {
        AuthResult::Failure {
            kind: FailureKind::Application,
            error_code: Some(error_code),
            message: message.into(),
        }
    }

    pub(crate) fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        AuthResult::Failure {
            kind,
            error_code: None,
            message: message.into(),
        }
    }

    pub fn session_token(&self) -> Option<&str> {
        match self {
            AuthResult::Success { session_token, .. } => Some(session_token),
            AuthResult::Failure { .. } => None,
        }
    }

    pub fn error_code(&self) -> Option<&AuthErrorCode> {
        match self {
            AuthResult::Failure { error_code, .. } => error_code.as_ref(),
            AuthResult::Success { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            AuthResult::Failure { kind, .. } => Some(*kind),
            AuthResult::Success { .. } => None,
        }
    }

    /// Title and message to show for a failure. `None` on success.
    pub fn category(&self) -> Option<ErrorCategory> {
        let AuthResult::Failure {
            kind,
            error_code,
            message,
        } = self
        else {
            return None;
        };

        let category = match kind {
            FailureKind::Transport => ErrorCategory::connection(),
            FailureKind::Timeout => ErrorCategory::timeout(),
            FailureKind::Application => classify(error_code.as_ref(), message),
            FailureKind::Unexpected => ErrorCategory::unexpected(message.clone()),
        };
        Some(category)
    }

    /// Follow-up hint for the failure's error code, if any.
    pub fn tip(&self) -> Option<&'static str> {
        self.error_code().and_then(AuthErrorCode::tip)
    }
}

// === Server Response Parsing ===

/// Body returned by the login endpoint, success and failure alike.
///
/// Only `success` and `session_token` decide the outcome. The other fields
/// are read leniently: a value of the wrong type becomes text (or `None`)
/// rather than failing the whole body.
#[derive(Debug, Deserialize)]
pub(crate) struct ServerAuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "string_only")]
    pub session_token: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
}

/// Render any JSON value as display text. `null` is `None`.
fn value_to_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Option::<Value>::deserialize(deserializer)?))
}

fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl ServerAuthResponse {
    /// `user.expires_at`, if `user` is an object carrying one.
    fn expires_at(user: Option<Value>) -> Option<String> {
        match user? {
            Value::Object(mut fields) => value_to_text(fields.remove("expires_at")),
            _ => None,
        }
    }

    /// Turn a parsed body into a result.
    pub(crate) fn into_result(self) -> AuthResult {
        if self.success {
            return match self.session_token {
                Some(session_token) => AuthResult::Success {
                    session_token,
                    expires_at: Self::expires_at(self.user),
                },
                None => AuthResult::failure(
                    FailureKind::Unexpected,
                    "Server reported success without a session token",
                ),
            };
        }

        let code = self.error_code.as_deref().unwrap_or(UNKNOWN_CODE);
        let message = self.error.unwrap_or_else(|| "Unknown error".to_string());
        AuthResult::application(AuthErrorCode::parse(code), message)
    }
}
