//! # oddbook-server
//!
//! Journaling HTTP service. Each anonymous client, identified by a cookie,
//! gets a private directory of daily `YYYYMMDD.odd` files.
//!
//! This binary provides:
//! - **Identity assignment**: a one-year `HttpOnly` cookie per client
//! - **Entry API**: append text entries to today's file
//! - **File API**: list and download files from the last seven days
//! - **Clear API**: wipe a client's files and revoke its cookie
//! - **Static files** for the web front end

mod api;
mod config;
mod error;
mod identity;

use std::sync::Arc;

use oddbook_store::EntryStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,oddbook_server=debug")),
        )
        .init();

    info!("Starting oddbook server v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Open the entry store (creates the root directory if missing)
    // -----------------------------------------------------------------------
    let store = Arc::new(EntryStore::open(config.entries_path.clone()).await?);

    let http_addr = config.http_addr;
    let app_state = AppState {
        store,
        config: Arc::new(config),
    };

    // -----------------------------------------------------------------------
    // 4. Run the HTTP server until it fails or Ctrl+C arrives
    // -----------------------------------------------------------------------
    tokio::select! {
        result = api::serve(app_state, http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
