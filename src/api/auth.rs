use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::envelope::ApiResponse;
use super::transport::{ApiRequest, Transport};
use crate::constants::{AUTH_LOGIN_PATH, AUTH_SEND_OTP_PATH, AUTH_SIGN_UP_PATH};
use crate::models::{LoginForm, OtpRequest, SignUpForm};
use crate::storage::TokenStore;
use crate::utils::StudyHubError;

/// Login, OTP and signup calls; one round trip each, never retried
#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<dyn Transport>,
    tokens: TokenStore,
}

impl AuthClient {
    pub fn new(transport: Arc<dyn Transport>, tokens: TokenStore) -> Self {
        Self { transport, tokens }
    }

    /// Log in and persist the returned token
    ///
    /// A `success: false` reply is returned as-is and leaves the token
    /// store untouched.
    pub async fn login(&self, form: &LoginForm) -> Result<ApiResponse<Value>, StudyHubError> {
        form.validate()?;

        let request = ApiRequest::post(AUTH_LOGIN_PATH, serde_json::to_value(form)?);
        let response: ApiResponse<Value> =
            ApiResponse::from_reply(self.transport.execute(request).await?)?;

        match response.session_token() {
            Some(token) => {
                self.tokens.save(token)?;
                info!("Logged in as {}", form.email);
            }
            None if response.success => warn!("Login succeeded without a token"),
            None => info!("Login rejected for {}", form.email),
        }

        Ok(response)
    }

    /// Ask the server to email a one-time password
    pub async fn send_otp(&self, email: &str) -> Result<ApiResponse<Value>, StudyHubError> {
        let otp = OtpRequest {
            email: email.to_string(),
        };
        otp.validate()?;

        let request = ApiRequest::post(AUTH_SEND_OTP_PATH, serde_json::to_value(&otp)?);
        ApiResponse::from_reply(self.transport.execute(request).await?)
    }

    /// Create a student account; the OTP is checked by the server
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<ApiResponse<Value>, StudyHubError> {
        form.validate()?;

        let request = ApiRequest::post(AUTH_SIGN_UP_PATH, serde_json::to_value(form.body())?);
        ApiResponse::from_reply(self.transport.execute(request).await?)
    }

    /// Forget the local token; the server is not told
    pub fn sign_out(&self) -> Result<(), StudyHubError> {
        self.tokens.remove()?;
        info!("Signed out");
        Ok(())
    }
}
