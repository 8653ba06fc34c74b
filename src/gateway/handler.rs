use super::GatewayState;
use super::types::{SendRequest, SendResponse};
use crate::error::{GatewayError, Result};
use crate::recipient::RecipientId;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

/// `POST /send`: normalize the recipient and hand the text to the session.
///
/// Body rejections (wrong content type, malformed JSON, wrong field types)
/// are answered with the same `{status, message}` envelope as send failures.
pub(super) async fn send_message(
    State(state): State<GatewayState>,
    payload: std::result::Result<Json<SendRequest>, JsonRejection>,
) -> Result<Json<SendResponse>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let reason = rejection.body_text();
            tracing::warn!("Rejected send request: {}", reason);
            return Err(GatewayError::InvalidRequest(reason));
        }
    };

    tracing::info!(
        "Send request to {:?}: {:?}",
        request.phone_number,
        request.message
    );

    let (phone_number, text) = request.validate().inspect_err(|e| {
        tracing::warn!("Rejected send request: {}", e);
    })?;
    let recipient = RecipientId::from_phone(phone_number);

    let status = state.session.status();
    if !status.is_ready() {
        tracing::warn!("Relaying to {} while session is {}", recipient, status);
    }

    match state.session.send_text(&recipient, text).await {
        Ok(message_id) => {
            tracing::debug!("Message {} accepted for {}", message_id, recipient);
            Ok(Json(SendResponse::sent()))
        }
        Err(e) => {
            tracing::error!("Error sending message to {}: {}", recipient, e);
            Err(e)
        }
    }
}
