//! Pairing code display.
//!
//! On first run the WhatsApp client issues a pairing code that has to be
//! scanned from the phone (Linked Devices). It is printed to the operator's
//! terminal as a QR code together with the raw code string.

use qrcode::QrCode;
use qrcode::render::unicode::Dense1x2;
use qrcode::types::QrError;
use std::io::{self, Write};
use std::sync::Mutex;

/// Writes pairing codes to an operator-facing sink (stdout in production).
pub struct PairingRenderer {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl PairingRenderer {
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(sink)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Print one pairing code. Falls back to the raw code alone when it
    /// cannot be encoded as a QR symbol.
    pub fn render(&self, code: &str) -> io::Result<()> {
        let mut out = self
            .sink
            .lock()
            .map_err(|_| io::Error::other("pairing output lock poisoned"))?;

        writeln!(out, "QR RECEIVED {code}")?;
        match render_qr(code) {
            Ok(qr) => {
                writeln!(out, "{qr}")?;
                writeln!(out, "Please scan the QR code above with your WhatsApp.")?;
            }
            Err(e) => {
                tracing::warn!("WhatsApp: pairing code cannot be drawn as QR: {}", e);
                writeln!(out, "Enter the code above in WhatsApp > Linked Devices.")?;
            }
        }
        out.flush()
    }
}

/// Compact terminal QR: two modules per character row, light-on-dark so it
/// scans from a dark terminal background.
pub fn render_qr(code: &str) -> Result<String, QrError> {
    let qr = QrCode::new(code.as_bytes())?;
    Ok(qr
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}
