//! Server startup errors.

use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

/// An environment variable held a value that could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },

    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr { value: String, source: AddrParseError },
}

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Missing or malformed `[package.metadata.leptos]` / `LEPTOS_*` settings.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
