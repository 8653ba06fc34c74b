//! Startup configuration.
//!
//! Every option is a CLI flag backed by an environment variable. A `.env`
//! file in the working directory is loaded first, so `PORT=3000` there is
//! enough to start. The port has no default: without it the process exits
//! before the session or the listener is started.

use clap::Parser;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Gateway configuration
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wa-gateway",
    version,
    about = "Relay HTTP requests to a WhatsApp account as outbound messages"
)]
pub struct Config {
    /// Port the relay listens on
    #[arg(long, env = "PORT")]
    pub port: u16,

    /// Address the relay binds to
    #[arg(long = "bind", env = "WA_BIND_ADDR", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind_addr: IpAddr,

    /// Where the paired WhatsApp session is stored
    #[arg(long, env = "WA_SESSION_DB")]
    pub session_db: Option<PathBuf>,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, env = "WA_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, env = "WA_DEBUG")]
    pub debug: bool,

    /// Problem with `.env`, reported once logging is up
    #[arg(skip)]
    pub env_file_warning: Option<String>,
}

impl Config {
    /// Load `.env` (if present) and parse the command line. Exits the
    /// process with a usage error when a required value is missing.
    pub fn load() -> Self {
        let env_file_warning = env_file_warning(dotenvy::dotenv().map(|_| ()));
        Self {
            env_file_warning,
            ..Self::parse()
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    pub fn session_db_path(&self) -> PathBuf {
        self.session_db
            .clone()
            .unwrap_or_else(|| gateway_home().join("whatsapp").join("session.db"))
    }
}

/// A missing `.env` is normal; anything else (unreadable, malformed) is
/// worth a warning.
fn env_file_warning(result: Result<(), dotenvy::Error>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => Some(format!("Ignoring .env file: {}", e)),
    }
}

/// `~/.wa-gateway`, or `./.wa-gateway` when no home directory is known.
pub fn gateway_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wa-gateway")
}
