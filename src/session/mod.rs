//! Messaging Session
//!
//! The seam between the relay and whatever drives the WhatsApp account.
//! The relay only ever holds an `Arc<dyn MessagingSession>`; production
//! wires in the WhatsApp Web client, tests wire in fakes.

mod lifecycle;

pub use lifecycle::LifecycleObserver;

use crate::error::Result;
use crate::recipient::RecipientId;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Lifecycle of the automation session as observed from its notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Uninitialized,
    /// A pairing QR code has been shown and not yet scanned
    PairingPending,
    Ready,
    Disconnected,
}

impl SessionStatus {
    pub fn is_ready(self) -> bool {
        self == SessionStatus::Ready
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionStatus::Uninitialized => "uninitialized",
            SessionStatus::PairingPending => "pairing pending",
            SessionStatus::Ready => "ready",
            SessionStatus::Disconnected => "disconnected",
        };
        f.write_str(label)
    }
}

/// Shared, cloneable view of the session status.
///
/// Written by the lifecycle observer, read by the relay.
#[derive(Debug, Clone)]
pub struct SessionState {
    tx: Arc<watch::Sender<SessionStatus>>,
}

impl SessionState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionStatus::Uninitialized);
        Self { tx: Arc::new(tx) }
    }

    pub fn status(&self) -> SessionStatus {
        *self.tx.borrow()
    }

    pub fn set(&self, status: SessionStatus) {
        self.tx.send_replace(status);
    }

    /// Resolve once the session reports ready (immediately if it already is).
    pub async fn wait_ready(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait
        let _ = rx.wait_for(|status| status.is_ready()).await;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability the relay needs from the automation session.
#[async_trait]
pub trait MessagingSession: Send + Sync {
    /// Current lifecycle status, for diagnostics.
    fn status(&self) -> SessionStatus;

    /// Send a plain text message. Returns the backend message id.
    async fn send_text(&self, recipient: &RecipientId, text: &str) -> Result<String>;
}
