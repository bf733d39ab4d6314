use colored::Colorize;
use std::fmt;

use crate::api::ApiResponse;
use crate::constants::NETWORK_ERROR_MESSAGE;
use crate::utils::{ErrorKind, StudyHubError};

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Error,
}

/// A dismissable message, the only way failures reach the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    /// Failure class; `None` for success alerts
    pub kind: Option<ErrorKind>,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Success,
            kind: None,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Error,
            kind: Some(kind),
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// Present a transport, storage or validation error
    ///
    /// `fallback` names the operation for failures whose own text is not
    /// meant for users (storage).
    pub fn from_error(err: &StudyHubError, fallback: &str) -> Self {
        let kind = err.kind();
        match (kind, err) {
            (_, StudyHubError::ValidationError(msg)) => Self::failure(kind, msg.clone()),
            (ErrorKind::Network, _) => Self::failure(kind, NETWORK_ERROR_MESSAGE),
            _ => Self::failure(kind, fallback),
        }
    }

    /// Present a reply: its message on failure, `success_message` otherwise
    pub fn from_response<T>(
        response: &ApiResponse<T>,
        success_message: &str,
        fallback: &str,
    ) -> Self {
        match response.failure_kind() {
            None => Self::success(success_message),
            Some(kind) => {
                let message = response
                    .message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(fallback);
                Self::failure(kind, message)
            }
        }
    }

    /// Present the outcome of one request, whichever channel it failed on
    pub fn from_result<T>(
        result: &Result<ApiResponse<T>, StudyHubError>,
        success_message: &str,
        fallback: &str,
    ) -> Self {
        match result {
            Ok(response) => Self::from_response(response, success_message, fallback),
            Err(err) => Self::from_error(err, fallback),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == AlertLevel::Success
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self.level {
            AlertLevel::Success => format!("[{}]", self.title).green().bold(),
            AlertLevel::Error => format!("[{}]", self.title).red().bold(),
        };
        write!(f, "{} {}", title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpReply;
    use serde_json::{json, Value};

    fn response(status: u16, body: Value) -> ApiResponse<Value> {
        ApiResponse::from_reply(HttpReply { status, body }).unwrap()
    }

    #[test]
    fn test_network_errors_share_one_message() {
        for err in [
            StudyHubError::NetworkError("dns".into()),
            StudyHubError::MalformedResponse("html".into()),
        ] {
            let alert = Alert::from_error(&err, "Login failed");
            assert_eq!(alert.message, NETWORK_ERROR_MESSAGE);
            assert_eq!(alert.kind, Some(ErrorKind::Network));
        }
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = StudyHubError::ValidationError("Passwords do not match".into());
        let alert = Alert::from_error(&err, "Signup failed");
        assert_eq!(alert.message, "Passwords do not match");
        assert_eq!(alert.kind, Some(ErrorKind::Validation));
    }

    #[test]
    fn test_storage_error_uses_fallback() {
        let err = StudyHubError::StorageUnavailable("/data: permission denied".into());
        let alert = Alert::from_error(&err, "Failed to sign out");
        assert_eq!(alert.message, "Failed to sign out");
        assert_eq!(alert.kind, Some(ErrorKind::Storage));
    }

    #[test]
    fn test_rejected_reply_prefers_server_message() {
        let alert = Alert::from_response(
            &response(400, json!({ "success": false, "message": "User already exists" })),
            "Account created successfully!",
            "Signup failed",
        );
        assert!(!alert.is_success());
        assert_eq!(alert.message, "User already exists");
        assert_eq!(alert.kind, Some(ErrorKind::Rejected));

        let alert = Alert::from_response(
            &response(401, json!({ "success": false, "message": "" })),
            "Login successful!",
            "Login failed",
        );
        assert_eq!(alert.message, "Login failed");
        assert_eq!(alert.kind, Some(ErrorKind::Auth));
    }

    #[test]
    fn test_success_reply() {
        let alert = Alert::from_result(
            &Ok(response(200, json!({ "success": true }))),
            "OTP sent to your email",
            "Failed to send OTP",
        );
        assert!(alert.is_success());
        assert_eq!(alert.title, "Success");
        assert_eq!(alert.message, "OTP sent to your email");
    }
}
