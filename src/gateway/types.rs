use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Body of `POST /send`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendRequest {
    pub phone_number: Option<String>,
    pub message: Option<String>,
}

impl SendRequest {
    pub fn new(phone_number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            message: Some(message.into()),
        }
    }

    /// Both fields must be present and non-empty. Returns `(phone_number, message)`.
    pub fn validate(&self) -> Result<(&str, &str)> {
        let phone = match self.phone_number.as_deref() {
            Some(p) if !p.trim().is_empty() => p,
            _ => return Err(GatewayError::missing_field("phone_number")),
        };
        let message = match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => return Err(GatewayError::missing_field("message")),
        };
        Ok((phone, message))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendStatus {
    Success,
    Error,
}

/// Body of every `/send` response, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    pub status: SendStatus,
    pub message: String,
}

impl SendResponse {
    pub fn sent() -> Self {
        Self {
            status: SendStatus::Success,
            message: "Message sent".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SendStatus::Error,
            message: message.into(),
        }
    }
}
