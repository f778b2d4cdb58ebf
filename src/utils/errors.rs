use std::net::SocketAddr;
use thiserror::Error;

/// Unified error type for the node and the mint service
#[derive(Error, Debug)]
pub enum KuberError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid port {0:?}")]
    InvalidPort(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience alias
pub type Result<T> = std::result::Result<T, KuberError>;
