//! WhatsApp session
//!
//! Session construction, lifecycle event handling and outbound sends.

use crate::error::{GatewayError, Result as SendResult};
use crate::recipient::RecipientId;
use crate::session::{LifecycleObserver, MessagingSession, SessionState, SessionStatus};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use wacore::types::events::Event;
use wacore_binary::jid::Jid;
use waproto::whatsapp as wa;
use whatsapp_rust::bot::Bot;
use whatsapp_rust::client::Client;
use whatsapp_rust_sqlite_storage::SqliteStore;
use whatsapp_rust_tokio_transport::TokioWebSocketTransportFactory;
use whatsapp_rust_ureq_http_client::UreqHttpClient;

type ClientSlot = Arc<RwLock<Option<Arc<Client>>>>;

/// Messaging session backed by a WhatsApp Web client.
pub struct WhatsAppSession {
    state: SessionState,
    /// Set on the first `Connected` event, cleared on logout
    client: ClientSlot,
}

impl WhatsAppSession {
    /// Open the session store, build the client and start it in the
    /// background. Returns as soon as the client is spawned; readiness is
    /// reported later through `observer`.
    ///
    /// If already paired (store has credentials), reconnects silently.
    /// Otherwise pairing QR codes are rendered by the observer.
    pub async fn start(
        db_path: &Path,
        observer: LifecycleObserver,
    ) -> Result<(Arc<Self>, tokio::task::JoinHandle<()>)> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create session directory: {:?}", parent))?;
        }

        let backend = SqliteStore::new(db_path.to_string_lossy().as_ref())
            .await
            .map_err(|e| anyhow!("Failed to open WhatsApp session store {:?}: {}", db_path, e))?;

        let session = Arc::new(Self {
            state: observer.state().clone(),
            client: Arc::new(RwLock::new(None)),
        });

        let observer = Arc::new(observer);
        let slot = session.client.clone();

        let mut bot = Bot::builder()
            .with_backend(Arc::new(backend))
            .with_transport_factory(TokioWebSocketTransportFactory::new())
            .with_http_client(UreqHttpClient::new())
            .on_event(move |event, client| {
                let observer = observer.clone();
                let slot = slot.clone();
                async move { handle_event(event, client, &observer, &slot).await }
            })
            .build()
            .await
            .map_err(|e| anyhow!("Failed to build WhatsApp client: {}", e))?;

        tracing::info!("Initializing WhatsApp client (session store: {:?})", db_path);

        let handle = tokio::spawn(async move {
            match bot.run().await {
                Ok(handle) => {
                    if let Err(e) = handle.await {
                        tracing::error!("WhatsApp client task error: {:?}", e);
                    }
                }
                Err(e) => {
                    tracing::error!("WhatsApp client error: {}", e);
                }
            }
        });

        Ok((session, handle))
    }
}

async fn handle_event(
    event: Event,
    client: Arc<Client>,
    observer: &LifecycleObserver,
    slot: &ClientSlot,
) {
    match event {
        Event::PairingQrCode { ref code, .. } => observer.on_pairing_code(code),
        Event::PairSuccess(_) => observer.on_paired(),
        Event::Connected(_) => {
            *slot.write().await = Some(client);
            observer.on_ready();
        }
        Event::LoggedOut(_) => {
            slot.write().await.take();
            observer.on_disconnected("logged out, pairing required on next start");
        }
        Event::Disconnected(_) => observer.on_disconnected("disconnected"),
        _ => {}
    }
}

#[async_trait]
impl MessagingSession for WhatsAppSession {
    fn status(&self) -> SessionStatus {
        self.state.status()
    }

    async fn send_text(&self, recipient: &RecipientId, text: &str) -> SendResult<String> {
        let client = self
            .client
            .read()
            .await
            .clone()
            .ok_or(GatewayError::SessionNotReady)?;

        let jid: Jid = recipient
            .as_str()
            .parse()
            .map_err(|e| GatewayError::InvalidRecipient(format!("{}: {}", recipient, e)))?;

        let message = wa::Message {
            conversation: Some(text.to_string()),
            ..Default::default()
        };

        client
            .send_message(jid, message)
            .await
            .map_err(|e| GatewayError::Send(e.to_string()))
    }
}
