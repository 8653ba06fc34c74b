//! Relay error type and its HTTP mapping.

use crate::gateway::SendResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to `/send` callers.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Body could not be read as a send request, or a required field is absent
    #[error("{0}")]
    InvalidRequest(String),

    /// No connected client yet; the pairing QR code has not been scanned or
    /// the stored session is still reconnecting.
    #[error("WhatsApp session is not ready")]
    SessionNotReady,

    #[error("Invalid recipient '{0}'")]
    InvalidRecipient(String),

    #[error("{0}")]
    Send(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    pub fn missing_field(name: &str) -> Self {
        GatewayError::InvalidRequest(format!("Missing required field '{name}'"))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(SendResponse::error(self.to_string()))).into_response()
    }
}
