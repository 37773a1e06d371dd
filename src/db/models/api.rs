use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MISSING_FIELDS: &str = "Missing fields";

/// Body of `POST /api/send-link`.
///
/// Both fields are optional at the serde level so that an absent or `null`
/// value reaches validation and is reported as a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendLinkRequest {
    #[validate(
        required(message = "Missing fields"),
        length(min = 1, message = "Missing fields")
    )]
    pub doctor_name: Option<String>,
    #[validate(
        required(message = "Missing fields"),
        length(min = 1, message = "Missing fields")
    )]
    pub phone_number: Option<String>,
}

impl SendLinkRequest {
    pub fn new(doctor_name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            doctor_name: Some(doctor_name.into()),
            phone_number: Some(phone_number.into()),
        }
    }
}

// 统一响应结构: {success, link?, error?}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendLinkResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendLinkResponse {
    pub fn issued(link: impl Into<String>) -> Self {
        Self {
            success: true,
            link: Some(link.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            link: None,
            error: Some(error.into()),
        }
    }
}

/// Outcome of one row of a bulk submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResult {
    pub phone_number: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BulkResult {
    pub fn from_response(phone_number: impl Into<String>, response: SendLinkResponse) -> Self {
        Self {
            phone_number: phone_number.into(),
            success: response.success,
            link: response.link,
            error: response.error,
        }
    }

    pub fn failure(phone_number: impl Into<String>, error: impl Into<String>) -> Self {
        Self::from_response(phone_number, SendLinkResponse::failure(error))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
