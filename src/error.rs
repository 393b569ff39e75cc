//! Host startup errors.

use std::net::SocketAddr;

/// Errors that stop the host from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// `PORT` or `HOST` could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The Leptos site configuration is missing or malformed.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
