use thiserror::Error;

/// Main error type for StudyHub
///
/// Only transport, parse, storage and client-side validation problems are
/// errors. A reply with `success: false` is data, see `ApiResponse`.
#[derive(Error, Debug)]
pub enum StudyHubError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Coarse classification used to pick how a failure is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected on the client before any request was sent
    Validation,
    /// Server refused the credentials (HTTP 401/403)
    Auth,
    /// Server answered `success: false` for any other reason
    Rejected,
    /// Transport or parse failure; timeouts, DNS and 5xx bodies look alike
    Network,
    /// Local key-value storage could not be used
    Storage,
}

impl StudyHubError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationError(_) => ErrorKind::Validation,
            Self::StorageUnavailable(_) | Self::IoError(_) => ErrorKind::Storage,
            Self::NetworkError(_) | Self::MalformedResponse(_) => ErrorKind::Network,
            Self::ConfigError(_) => ErrorKind::Validation,
        }
    }
}

impl From<reqwest::Error> for StudyHubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StudyHubError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
