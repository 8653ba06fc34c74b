//! Reacts to the automation session's lifecycle notifications.

use super::{SessionState, SessionStatus};
use crate::pairing::PairingRenderer;
use std::sync::Arc;

/// Turns session notifications into status updates and operator output.
pub struct LifecycleObserver {
    state: SessionState,
    renderer: Arc<PairingRenderer>,
}

impl LifecycleObserver {
    pub fn new(state: SessionState, renderer: Arc<PairingRenderer>) -> Self {
        Self { state, renderer }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// A fresh pairing code was issued. Rendered once per call; repeated
    /// codes (after a previous one expired) are each rendered again.
    pub fn on_pairing_code(&self, code: &str) {
        self.state.set(SessionStatus::PairingPending);
        tracing::info!("WhatsApp: QR code received (scan with your phone)");
        if let Err(e) = self.renderer.render(code) {
            tracing::error!("WhatsApp: failed to display pairing code: {}", e);
        }
    }

    pub fn on_paired(&self) {
        tracing::info!("WhatsApp: pairing successful");
    }

    pub fn on_ready(&self) {
        self.state.set(SessionStatus::Ready);
        tracing::info!("WhatsApp: client is ready");
    }

    pub fn on_disconnected(&self, reason: &str) {
        self.state.set(SessionStatus::Disconnected);
        tracing::warn!("WhatsApp: {}", reason);
    }
}
