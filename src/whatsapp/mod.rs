//! WhatsApp Integration
//!
//! Drives a WhatsApp Web (multi-device) client as the relay's messaging
//! session. The first run shows a pairing QR code; afterwards the paired
//! session is restored from the local store without operator involvement.

mod agent;

pub use agent::WhatsAppSession;
