//! API request and response types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read a field as a string; any other JSON value counts as absent
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Verified identity of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
}

/// Login request
///
/// Both fields are optional on the wire so a missing password can be
/// reported as such instead of as a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub password: Option<String>,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Plain message body used for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// POST /forgot-password/check body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetCheckRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub admin_code: Option<String>,
}

/// POST /forgot-password/reset body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub admin_code: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub new_password: Option<String>,
}

/// Result of a password reset check or reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetOutcome {
    pub success: bool,
    pub message: String,
}

impl ResetOutcome {
    pub const UNKNOWN_USER: &'static str = "Username doesn't exist";
    pub const WRONG_ADMIN_CODE: &'static str = "Wrong admin code";
    pub const VERIFIED: &'static str = "User found, admin code verified.";
    pub const UPDATED: &'static str = "Password updated successfully!";

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn unknown_user() -> Self {
        Self::failure(Self::UNKNOWN_USER)
    }

    pub fn wrong_admin_code() -> Self {
        Self::failure(Self::WRONG_ADMIN_CODE)
    }

    pub fn verified() -> Self {
        Self {
            success: true,
            message: Self::VERIFIED.to_string(),
        }
    }

    pub fn updated() -> Self {
        Self {
            success: true,
            message: Self::UPDATED.to_string(),
        }
    }
}
