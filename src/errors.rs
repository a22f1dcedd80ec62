//! Process-level errors.
//!
//! Authentication failures are never reported through this type; they are
//! folded into [`crate::client::AuthResult::Failure`] by the auth client.
//! `AutholasError` covers what can go wrong around the login call: loading
//! configuration, building the HTTP client, prompting on the terminal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutholasError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP client error: {0}")]
    HttpClientError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Prompt error: {0}")]
    PromptError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<inquire::InquireError> for AutholasError {
    fn from(err: inquire::InquireError) -> Self {
        AutholasError::PromptError(err.to_string())
    }
}

pub type AutholasResult<T> = Result<T, AutholasError>;
