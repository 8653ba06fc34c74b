//! Scenario tests for the relay and session lifecycle.


use crate::error::{GatewayError, Result};
use crate::recipient::RecipientId;
use crate::session::{MessagingSession, SessionStatus};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory session: records every send, fails for chosen recipients.
pub(crate) struct FakeSession {
    status: SessionStatus,
    fail_for: HashSet<String>,
    delay: Option<Duration>,
    sent: Mutex<Vec<(String, String)>>,
}

impl FakeSession {
    pub(crate) fn ready() -> Self {
        Self {
            status: SessionStatus::Ready,
            fail_for: HashSet::new(),
            delay: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn not_ready() -> Self {
        Self {
            status: SessionStatus::PairingPending,
            ..Self::ready()
        }
    }

    /// Reject sends to this chat id with a backend-style error.
    pub(crate) fn failing_for(mut self, recipient: &str) -> Self {
        self.fail_for.insert(recipient.to_string());
        self
    }

    /// Hold each send for a time derived from the recipient, so concurrent
    /// requests complete out of order.
    pub(crate) fn with_staggered_delay(mut self, base: Duration) -> Self {
        self.delay = Some(base);
        self
    }

    pub(crate) fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingSession for FakeSession {
    fn status(&self) -> SessionStatus {
        self.status
    }

    async fn send_text(&self, recipient: &RecipientId, text: &str) -> Result<String> {
        if let Some(base) = self.delay {
            let spread = recipient.user().bytes().map(u32::from).sum::<u32>() % 7;
            tokio::time::sleep(base * (7 - spread)).await;
        }
        if !self.status.is_ready() {
            return Err(GatewayError::SessionNotReady);
        }
        if self.fail_for.contains(recipient.as_str()) {
            return Err(GatewayError::Send(format!(
                "recipient {} is not on WhatsApp",
                recipient.user()
            )));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push((recipient.to_string(), text.to_string()));
        Ok(format!("3EB0{:08X}", sent.len()))
    }
}
