//! Error codes returned by the Autholas API and their user-facing text.
//!
//! The service reports failures as a stable machine-readable `error_code`
//! next to a free-form `error` message. Known codes map to a fixed
//! [`ErrorCategory`]; anything else falls back to the server's message.

use std::fmt;

/// Error codes returned by the Autholas login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    /// Username or password is wrong
    InvalidCredentials,
    /// Account has been suspended
    UserBanned,
    /// Subscription has ended
    SubscriptionExpired,
    /// Too many devices bound to the account
    MaxDevicesReached,
    /// This HWID has been banned
    HwidBanned,
    /// The application's API key was rejected
    InvalidApiKey,
    /// Too many login attempts
    RateLimitExceeded,
    /// The application's developer account is suspended
    DeveloperSuspended,
    /// Request was missing fields
    MissingParameters,
    /// Server-side failure
    ServiceError,
    /// Any code this client does not know, kept verbatim
    Unknown(String),
}

/// Code assumed when a failure body carries no `error_code`.
pub const UNKNOWN_CODE: &str = "UNKNOWN";

/// Title and message shown to the user for a failed login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCategory {
    pub title: String,
    pub message: String,
}

impl ErrorCategory {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The generic category used for codes without a fixed entry.
    pub fn generic(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }

    pub(crate) fn connection() -> Self {
        Self::new(
            "Connection Error",
            "Unable to reach authentication server.\nPlease check your internet connection and try again.",
        )
    }

    pub(crate) fn timeout() -> Self {
        Self::new(
            "Request Timeout",
            "Server is taking too long to respond.\nPlease try again later.",
        )
    }

    pub(crate) fn unexpected(message: impl Into<String>) -> Self {
        Self::new("Unexpected Error", message)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.message)
    }
}

impl AuthErrorCode {
    /// Parse a wire code. Unrecognised codes become [`AuthErrorCode::Unknown`].
    pub fn parse(code: &str) -> Self {
        match code {
            "INVALID_CREDENTIALS" => AuthErrorCode::InvalidCredentials,
            "USER_BANNED" => AuthErrorCode::UserBanned,
            "SUBSCRIPTION_EXPIRED" => AuthErrorCode::SubscriptionExpired,
            "MAX_DEVICES_REACHED" => AuthErrorCode::MaxDevicesReached,
            "HWID_BANNED" => AuthErrorCode::HwidBanned,
            "INVALID_API_KEY" => AuthErrorCode::InvalidApiKey,
            "RATE_LIMIT_EXCEEDED" => AuthErrorCode::RateLimitExceeded,
            "DEVELOPER_SUSPENDED" => AuthErrorCode::DeveloperSuspended,
            "MISSING_PARAMETERS" => AuthErrorCode::MissingParameters,
            "SERVICE_ERROR" => AuthErrorCode::ServiceError,
            other => AuthErrorCode::Unknown(other.to_string()),
        }
    }

    /// The code as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            AuthErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthErrorCode::UserBanned => "USER_BANNED",
            AuthErrorCode::SubscriptionExpired => "SUBSCRIPTION_EXPIRED",
            AuthErrorCode::MaxDevicesReached => "MAX_DEVICES_REACHED",
            AuthErrorCode::HwidBanned => "HWID_BANNED",
            AuthErrorCode::InvalidApiKey => "INVALID_API_KEY",
            AuthErrorCode::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            AuthErrorCode::DeveloperSuspended => "DEVELOPER_SUSPENDED",
            AuthErrorCode::MissingParameters => "MISSING_PARAMETERS",
            AuthErrorCode::ServiceError => "SERVICE_ERROR",
            AuthErrorCode::Unknown(raw) => raw,
        }
    }

    /// Fixed `(title, message)` for known codes, `None` for unknown ones.
    pub fn known_category(&self) -> Option<(&'static str, &'static str)> {
        let pair = match self {
            AuthErrorCode::InvalidCredentials => (
                "Login Failed",
                "Username or password is incorrect.\nPlease double-check your credentials and try again.",
            ),
            AuthErrorCode::UserBanned => (
                "Account Banned",
                "Your account has been suspended.\nPlease contact support for assistance.",
            ),
            AuthErrorCode::SubscriptionExpired => (
                "Subscription Expired",
                "Your subscription has ended.\nPlease renew your subscription to continue.",
            ),
            AuthErrorCode::MaxDevicesReached => (
                "Device Limit Reached",
                "Maximum number of devices exceeded.\nPlease contact support to reset your devices.",
            ),
            AuthErrorCode::HwidBanned => (
                "Device Banned",
                "This device has been banned.\nPlease contact support for assistance.",
            ),
            AuthErrorCode::InvalidApiKey => (
                "Service Error",
                "Authentication service unavailable.\nPlease try again later or contact support.",
            ),
            AuthErrorCode::RateLimitExceeded => {
                ("Too Many Attempts", "Please wait before trying again.")
            }
            AuthErrorCode::DeveloperSuspended => (
                "Service Unavailable",
                "Authentication service is temporarily unavailable.\nPlease contact support.",
            ),
            AuthErrorCode::MissingParameters => (
                "Invalid Request",
                "Missing required parameters.\nPlease try again.",
            ),
            AuthErrorCode::ServiceError => (
                "Service Error",
                "Authentication service is temporarily unavailable.\nPlease try again later.",
            ),
            AuthErrorCode::Unknown(_) => return None,
        };
        Some(pair)
    }

    /// Category for this code, using `fallback` as the message for unknown codes.
    pub fn category(&self, fallback: &str) -> ErrorCategory {
        match self.known_category() {
            Some((title, message)) => ErrorCategory::new(title, message),
            None => ErrorCategory::generic(fallback),
        }
    }

    /// Follow-up hint shown after a failed login, if the code has one.
    pub fn tip(&self) -> Option<&'static str> {
        match self {
            AuthErrorCode::MaxDevicesReached => Some(
                "Contact support to reset your device limit or login from a previously used device.",
            ),
            AuthErrorCode::HwidBanned => Some(
                "This specific device has been banned. Try from a different device or contact support.",
            ),
            AuthErrorCode::InvalidCredentials => {
                Some("Double-check your username and password spelling.")
            }
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AuthErrorCode::Unknown(_))
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an optional error code, falling back to `fallback_message`.
pub fn classify(code: Option<&AuthErrorCode>, fallback_message: &str) -> ErrorCategory {
    match code {
        Some(code) => code.category(fallback_message),
        None => ErrorCategory::generic(fallback_message),
    }
}

/// Classify a raw wire code.
pub fn classify_code(code: &str, fallback_message: &str) -> ErrorCategory {
    AuthErrorCode::parse(code).category(fallback_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [(&str, &str, &str); 10] = [
        (
            "INVALID_CREDENTIALS",
            "Login Failed",
            "Username or password is incorrect.\nPlease double-check your credentials and try again.",
        ),
        (
            "USER_BANNED",
            "Account Banned",
            "Your account has been suspended.\nPlease contact support for assistance.",
        ),
        (
            "SUBSCRIPTION_EXPIRED",
            "Subscription Expired",
            "Your subscription has ended.\nPlease renew your subscription to continue.",
        ),
        (
            "MAX_DEVICES_REACHED",
            "Device Limit Reached",
            "Maximum number of devices exceeded.\nPlease contact support to reset your devices.",
        ),
        (
            "HWID_BANNED",
            "Device Banned",
            "This device has been banned.\nPlease contact support for assistance.",
        ),
        (
            "INVALID_API_KEY",
            "Service Error",
            "Authentication service unavailable.\nPlease try again later or contact support.",
        ),
        (
            "RATE_LIMIT_EXCEEDED",
            "Too Many Attempts",
            "Please wait before trying again.",
        ),
        (
            "DEVELOPER_SUSPENDED",
            "Service Unavailable",
            "Authentication service is temporarily unavailable.\nPlease contact support.",
        ),
        (
            "MISSING_PARAMETERS",
            "Invalid Request",
            "Missing required parameters.\nPlease try again.",
        ),
        (
            "SERVICE_ERROR",
            "Service Error",
            "Authentication service is temporarily unavailable.\nPlease try again later.",
        ),
    ];

    #[test]
    fn every_known_code_has_its_fixed_pair() {
        for (code, title, message) in TABLE {
            let category = classify_code(code, "server said something else");
            assert_eq!(category.title, title, "title for {code}");
            assert_eq!(category.message, message, "message for {code}");
        }
    }

    #[test]
    fn known_codes_round_trip_through_as_str() {
        for (code, _, _) in TABLE {
            let parsed = AuthErrorCode::parse(code);
            assert!(parsed.is_known(), "{code} should be known");
            assert_eq!(parsed.as_str(), code);
        }
    }

    #[test]
    fn unknown_code_uses_fallback_message() {
        assert_eq!(classify_code("FOO", "bar"), ErrorCategory::new("Error", "bar"));
        assert_eq!(
            AuthErrorCode::parse("FOO"),
            AuthErrorCode::Unknown("FOO".to_string())
        );
    }

    #[test]
    fn absent_code_uses_fallback_message() {
        assert_eq!(classify(None, "bar"), ErrorCategory::generic("bar"));
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(!AuthErrorCode::parse("invalid_credentials").is_known());
    }

    #[test]
    fn tips_exist_only_for_device_and_credential_errors() {
        assert!(AuthErrorCode::MaxDevicesReached.tip().is_some());
        assert!(AuthErrorCode::HwidBanned.tip().is_some());
        assert!(AuthErrorCode::InvalidCredentials.tip().is_some());

        assert!(AuthErrorCode::UserBanned.tip().is_none());
        assert!(AuthErrorCode::Unknown("X".to_string()).tip().is_none());
    }
}
