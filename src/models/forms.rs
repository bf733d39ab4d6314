use serde::Serialize;

use crate::constants::{
    ENTER_EMAIL_MESSAGE, FILL_ALL_FIELDS_MESSAGE, PASSWORD_MISMATCH_MESSAGE,
    SIGN_UP_ACCOUNT_TYPE,
};
use crate::utils::StudyHubError;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Credentials for `/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), StudyHubError> {
        if blank(&self.email) || self.password.is_empty() {
            return Err(StudyHubError::ValidationError(FILL_ALL_FIELDS_MESSAGE.into()));
        }
        Ok(())
    }
}

/// Body for `/auth/sendotp`
#[derive(Debug, Clone, Serialize)]
pub struct OtpRequest {
    pub email: String,
}

impl OtpRequest {
    pub fn validate(&self) -> Result<(), StudyHubError> {
        if blank(&self.email) {
            return Err(StudyHubError::ValidationError(ENTER_EMAIL_MESSAGE.into()));
        }
        Ok(())
    }
}

/// Everything the signup screen collects
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub password: String,
    pub confirm_password: String,
    pub otp: String,
}

/// Signup form as sent on the wire, with the fixed account type
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignUpBody<'a> {
    #[serde(flatten)]
    pub form: &'a SignUpForm,
    pub account_type: &'static str,
}

impl SignUpForm {
    /// Client-side checks: every field present, passwords equal
    ///
    /// OTP correctness is left to the server.
    pub fn validate(&self) -> Result<(), StudyHubError> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.contact_number,
            &self.otp,
        ];
        if required.iter().any(|v| blank(v))
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(StudyHubError::ValidationError(FILL_ALL_FIELDS_MESSAGE.into()));
        }
        if self.password != self.confirm_password {
            return Err(StudyHubError::ValidationError(
                PASSWORD_MISMATCH_MESSAGE.into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn body(&self) -> SignUpBody<'_> {
        SignUpBody {
            form: self,
            account_type: SIGN_UP_ACCOUNT_TYPE,
        }
    }
}

/// Partial profile update; only `Some` fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl ProfileUpdate {
    /// Bio edit: only `about`
    pub fn bio(about: impl Into<String>) -> Self {
        Self {
            about: Some(about.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
