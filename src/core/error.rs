//! Error types and handling for the RPC server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and the transport, providing consistent error handling across
//! the entire application.

use thiserror::Error;

/// A specialized Result type for RPC server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the RPC server.
///
/// This enum captures all possible error conditions that can occur during
/// server operation, including domain-specific errors and transport failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the cluster domain.
    #[error("Cluster error: {0}")]
    Cluster(#[from] crate::domains::cluster::ClusterError),

    /// Error raised while routing a request envelope.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] super::rpc::DispatchError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cluster::ClusterError;

    #[test]
    fn test_cluster_error_conversion() {
        let err: Error = ClusterError::not_found("7").into();
        assert_eq!(err.to_string(), "Cluster error: Cluster 7 not found");
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("missing RPC_HTTP_PORT");
        assert_eq!(err.to_string(), "Configuration error: missing RPC_HTTP_PORT");
    }
}
