//! User-facing text for a login outcome.
//!
//! Kept apart from [`crate::client::AuthClient::authenticate`] so callers can
//! present results however they like; the binary just prints these lines.

use crate::client::responses::AuthResult;

/// Lines describing `result` for `username`.
///
/// On success: a welcome and, if known, the subscription expiry.
/// On failure: the category title followed by its message.
pub fn outcome_lines(result: &AuthResult, username: &str) -> Vec<String> {
    match result {
        AuthResult::Success { expires_at, .. } => {
            let mut lines = vec![
                "Login successful!".to_string(),
                format!("Welcome, {username}!"),
            ];
            if let Some(expires_at) = expires_at {
                lines.push(format!("Subscription expires: {expires_at}"));
            }
            lines
        }
        AuthResult::Failure { .. } => match result.category() {
            Some(category) => {
                let mut lines = vec![category.title];
                lines.extend(category.message.lines().map(str::to_string));
                lines
            }
            None => Vec::new(),
        },
    }
}

/// The tip line printed after "Authentication failed.", if any.
pub fn tip_line(result: &AuthResult) -> Option<String> {
    result.tip().map(|tip| format!("Tip: {tip}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::errors::AuthErrorCode;
    use crate::client::responses::FailureKind;

    #[test]
    fn success_lines_include_expiry() {
        let result = AuthResult::Success {
            session_token: "abc".to_string(),
            expires_at: Some("2025-01-01".to_string()),
        };

        assert_eq!(
            outcome_lines(&result, "alice"),
            vec![
                "Login successful!",
                "Welcome, alice!",
                "Subscription expires: 2025-01-01",
            ]
        );
        assert!(tip_line(&result).is_none());
    }

    #[test]
    fn success_lines_without_expiry() {
        let result = AuthResult::Success {
            session_token: "abc".to_string(),
            expires_at: None,
        };
        assert_eq!(outcome_lines(&result, "bob").len(), 2);
    }

    #[test]
    fn known_failure_prints_title_and_message() {
        let result = AuthResult::Failure {
            kind: FailureKind::Application,
            error_code: Some(AuthErrorCode::MaxDevicesReached),
            message: "too many".to_string(),
        };

        assert_eq!(
            outcome_lines(&result, "alice"),
            vec![
                "Device Limit Reached",
                "Maximum number of devices exceeded.",
                "Please contact support to reset your devices.",
            ]
        );
        assert!(tip_line(&result).unwrap().starts_with("Tip: Contact support"));
    }

    #[test]
    fn unknown_failure_prints_server_message() {
        let result = AuthResult::Failure {
            kind: FailureKind::Application,
            error_code: Some(AuthErrorCode::Unknown("FOO".to_string())),
            message: "bar".to_string(),
        };
        assert_eq!(outcome_lines(&result, "alice"), vec!["Error", "bar"]);
    }

    #[test]
    fn timeout_failure_lines() {
        let result = AuthResult::Failure {
            kind: FailureKind::Timeout,
            error_code: None,
            message: "timed out".to_string(),
        };
        assert_eq!(outcome_lines(&result, "alice")[0], "Request Timeout");
    }
}
