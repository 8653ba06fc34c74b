//! Tracing subscriber setup.

use crate::config::Config;
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "wa-gateway.log";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Returns the file writer guard when `log_dir` is set; keep it alive for
/// the lifetime of the process or buffered lines are lost.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let default_filter = if config.debug {
        "wa_gateway=debug,tower_http=debug,whatsapp_rust=info"
    } else {
        "wa_gateway=info,whatsapp_rust=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {:?}", dir))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
