//! Server configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the server can start with zero
//! configuration for local development.

use std::net::SocketAddr;
use std::path::PathBuf;

use oddbook_shared::constants::DEFAULT_HTTP_PORT;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP API server.
    /// Env: `HTTP_ADDR`
    /// Default: `0.0.0.0:3000`
    pub http_addr: SocketAddr,

    /// Root directory holding one namespace directory per client.
    /// Env: `ENTRIES_PATH`
    /// Default: `./entries`
    pub entries_path: PathBuf,

    /// Directory served for any path outside the API.
    /// Env: `STATIC_DIR` (empty disables static serving)
    /// Default: `./public`
    pub static_dir: Option<PathBuf>,

    /// Whether the client cookie carries the `Secure` attribute.
    /// Enable when serving behind TLS.
    /// Env: `COOKIE_SECURE` (true/false)
    /// Default: `false`
    pub cookie_secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], DEFAULT_HTTP_PORT).into(),
            entries_path: PathBuf::from("./entries"),
            static_dir: Some(PathBuf::from("./public")),
            cookie_secure: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = var("HTTP_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(value = %addr, "Invalid HTTP_ADDR, using default");
            }
        }

        if let Some(path) = var("ENTRIES_PATH") {
            if !path.is_empty() {
                config.entries_path = PathBuf::from(path);
            }
        }

        if let Some(dir) = var("STATIC_DIR") {
            config.static_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }

        if let Some(val) = var("COOKIE_SECURE") {
            config.cookie_secure = val == "true" || val == "1";
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
