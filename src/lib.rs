//! WhatsApp Gateway
//!
//! Relays `POST /send` requests to a paired WhatsApp Web session. The session
//! is brought up once at startup; until the operator scans the pairing QR
//! code, sends fail at the session layer and are reported as HTTP 500.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod pairing;
pub mod recipient;
pub mod session;

#[cfg(feature = "whatsapp")]
pub mod whatsapp;

#[cfg(test)]
mod tests;

pub use error::{GatewayError, Result};
