//! Cluster-specific error types.

use thiserror::Error;

use crate::core::rpc::Status;

/// Errors that can occur during cluster operations.
///
/// Every variant maps onto an in-band response status; the display string
/// is used verbatim as the response's status message.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// The addressed cluster does not exist.
    #[error("Cluster {0} not found")]
    NotFound(String),

    /// The parameter bag could not be decoded.
    #[error("{0}")]
    InvalidParams(String),
}

impl ClusterError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a new "invalid params" error.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// The response status this error reports as.
    pub fn status(&self) -> Status {
        match self {
            Self::NotFound(_) => Status::NotFound,
            Self::InvalidParams(_) => Status::ParamsError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ClusterError::not_found("99");
        assert_eq!(err.to_string(), "Cluster 99 not found");
        assert_eq!(err.status(), Status::NotFound);
    }

    #[test]
    fn test_invalid_params_status() {
        let err = ClusterError::invalid_params("invalid type: string");
        assert_eq!(err.status(), Status::ParamsError);
    }
}
