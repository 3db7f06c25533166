use serde::Deserialize;
use std::net::SocketAddr;

/// Preview server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PreviewConfig {
    /// Address and port the preview server listens on
    /// Default: "127.0.0.1:8080"
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    /// Page kind served when a request has no `kind` query parameter
    /// Accepts kebab-case ("not-found") or snake_case ("not_found")
    /// Default: "not-found"
    #[serde(default = "default_kind")]
    pub default_kind: String,
    /// Graceful shutdown timeout in seconds
    /// Default: 5
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_secs: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            default_kind: default_kind(),
            shutdown_secs: default_shutdown_timeout(),
        }
    }
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_kind() -> String {
    "not-found".to_string()
}

fn default_shutdown_timeout() -> u64 {
    5
}
