//! HTTP Relay
//!
//! One route, `POST /send`, forwarding `{phone_number, message}` to the
//! messaging session. Requests are independent; the only shared piece is
//! the session handle, which the relay never mutates.

mod handler;
mod types;

pub use types::{SendRequest, SendResponse, SendStatus};

use crate::session::MessagingSession;
use anyhow::{Context, Result};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Request bodies above this are rejected before reaching the handler.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// State shared by relay handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub session: Arc<dyn MessagingSession>,
}

pub fn router(session: Arc<dyn MessagingSession>) -> Router {
    Router::new()
        .route("/send", post(handler::send_message))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(GatewayState { session })
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, session: Arc<dyn MessagingSession>) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind relay on {}", addr))?;
    serve_with_shutdown(listener, session, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    session: Arc<dyn MessagingSession>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().context("Relay listener has no address")?;
    tracing::info!("WhatsApp Gateway listening on {}", local_addr);

    axum::serve(listener, router(session))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Relay server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("WhatsApp Gateway shutting down");
}
