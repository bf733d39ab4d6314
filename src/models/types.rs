use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Account role as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Student,
    Instructor,
    Admin,
    /// Anything newer than this client knows about
    #[serde(untagged)]
    Other(String),
}

/// Phone numbers arrive as strings from some endpoints and as numbers from others
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Instructor => write!(f, "Instructor"),
            Self::Admin => write!(f, "Admin"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Profile of the signed-in user, as returned by `getUserDetails`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub account_type: Option<AccountType>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub additional_details: Option<AdditionalDetails>,
}

/// Free-form details the user fills in from the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDetails {
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub contact_number: Option<String>,
}

impl UserProfile {
    pub fn about(&self) -> Option<&str> {
        self.additional_details.as_ref()?.about.as_deref()
    }

    pub fn details(&self) -> Option<&AdditionalDetails> {
        self.additional_details.as_ref()
    }
}

/// A course the user is enrolled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    #[serde(rename = "_id")]
    pub id: String,
    pub course_name: String,
    #[serde(default)]
    pub total_duration: Option<String>,
    /// Server-computed, nominally 0 to 100
    #[serde(default)]
    pub progress_percentage: Option<f64>,
}

/// A course waiting in the (local only) cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub course_name: String,
    pub price: f64,
    #[serde(default)]
    pub thumbnail: String,
}
