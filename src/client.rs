//! Gateway Client
//!
//! Typed caller for the relay, for services (OTP senders and the like) that
//! deliver messages through a running gateway.

use crate::gateway::{SendRequest, SendResponse};
use anyhow::{Context, Result};

/// HTTP client for `POST /send` on a gateway.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    url: String,
}

impl GatewayClient {
    /// `url` is the full endpoint, e.g. `http://localhost:3000/send`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Ask the gateway to deliver `message` to `phone_number`.
    ///
    /// Any non-2xx answer is an error carrying the gateway's own message
    /// when the body has one.
    pub async fn send(&self, phone_number: &str, message: &str) -> Result<()> {
        tracing::info!("Sending to WA gateway {}: {}", self.url, phone_number);

        let response = self
            .http
            .post(&self.url)
            .json(&SendRequest::new(phone_number, message))
            .send()
            .await
            .with_context(|| format!("WA gateway unreachable at {}", self.url))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let detail = match response.json::<SendResponse>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        tracing::error!("WA gateway error ({}): {}", status, detail);
        anyhow::bail!("WA gateway returned {}: {}", status.as_u16(), detail)
    }
}
