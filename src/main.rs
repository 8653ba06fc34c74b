//! WhatsApp Gateway - relay `POST /send` to a WhatsApp account.

use anyhow::Result;
use std::sync::Arc;
use wa_gateway::config::Config;
use wa_gateway::pairing::PairingRenderer;
use wa_gateway::session::{LifecycleObserver, SessionState};
use wa_gateway::whatsapp::WhatsAppSession;
use wa_gateway::{gateway, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Exits here when PORT is missing, before anything is started
    let config = Config::load();
    let _log_guard = logging::init(&config)?;
    if let Some(warning) = &config.env_file_warning {
        tracing::warn!("{}", warning);
    }

    let state = SessionState::new();
    let observer = LifecycleObserver::new(state.clone(), Arc::new(PairingRenderer::stdout()));
    let (session, client_task) = WhatsAppSession::start(&config.session_db_path(), observer).await?;

    tokio::spawn(async move {
        state.wait_ready().await;
        tracing::info!("WhatsApp Gateway ready to relay messages");
    });

    let result = gateway::serve(config.listen_addr(), session).await;
    client_task.abort();
    result
}
