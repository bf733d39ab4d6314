use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::transport::HttpReply;
use crate::utils::{ErrorKind, StudyHubError};

/// Standard reply envelope: `{ success, message?, token?, data? }`
///
/// `success: false` is not an error. Callers inspect `success` and show
/// `message`; only transport and parse problems come back as `Err`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<String>,
    pub data: Option<T>,
    /// HTTP status the envelope arrived with
    #[serde(skip)]
    pub status: u16,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Validate a raw reply against the typed envelope
    pub fn from_reply(reply: HttpReply) -> Result<Self, StudyHubError> {
        let mut envelope: Self = serde_json::from_value(reply.body)?;
        envelope.status = reply.status;
        Ok(envelope)
    }
}

impl<T> ApiResponse<T> {
    /// Failure classification for a `success: false` reply
    pub fn failure_kind(&self) -> Option<ErrorKind> {
        if self.success {
            return None;
        }
        match self.status {
            401 | 403 => Some(ErrorKind::Auth),
            _ => Some(ErrorKind::Rejected),
        }
    }

    /// The non-empty session token carried by a successful reply
    pub fn session_token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn reply(status: u16, body: Value) -> HttpReply {
        HttpReply { status, body }
    }

    #[test]
    fn test_success_envelope() {
        let envelope: ApiResponse<Value> =
            ApiResponse::from_reply(reply(200, json!({ "success": true, "token": "X" }))).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.status, 200);
        assert_eq!(envelope.session_token(), Some("X"));
        assert_eq!(envelope.failure_kind(), None);
    }

    #[test]
    fn test_failure_envelope_is_data() {
        let envelope: ApiResponse<Value> = ApiResponse::from_reply(reply(
            401,
            json!({ "success": false, "message": "bad credentials" }),
        ))
        .unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("bad credentials"));
        assert_eq!(envelope.failure_kind(), Some(ErrorKind::Auth));
        assert_eq!(envelope.session_token(), None);
    }

    #[test]
    fn test_missing_success_means_failure() {
        let envelope: ApiResponse<Value> =
            ApiResponse::from_reply(reply(500, json!({ "error": "boom" }))).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.failure_kind(), Some(ErrorKind::Rejected));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let envelope: ApiResponse<Value> =
            ApiResponse::from_reply(reply(200, json!({ "success": true, "token": "" }))).unwrap();
        assert_eq!(envelope.session_token(), None);
    }

    #[test]
    fn test_wrong_data_shape_is_malformed() {
        let result = ApiResponse::<Vec<String>>::from_reply(reply(
            200,
            json!({ "success": true, "data": { "not": "a list" } }),
        ));
        assert!(matches!(result, Err(StudyHubError::MalformedResponse(_))));
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        let result = ApiResponse::<Value>::from_reply(reply(200, json!("ok")));
        assert!(result.is_err());
    }
}
