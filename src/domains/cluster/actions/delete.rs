//! Delete action - remove a cluster record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::core::rpc::{Status, decode_params};
use crate::domains::cluster::error::ClusterError;
use crate::domains::cluster::registry::ClusterRegistry;

/// Parameters for the delete action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteParams {
    /// ID of the cluster to remove.
    #[serde(rename = "ID", alias = "id", default)]
    pub id: String,
}

/// Response for the delete action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Outcome of the action.
    #[serde(rename = "Status")]
    pub status: Status,

    /// Human-readable outcome description.
    #[serde(rename = "StatusMessage")]
    pub status_message: String,
}

/// Delete action - removes one cluster record. The freed ID is never reused.
pub struct DeleteAction;

impl DeleteAction {
    /// Action name as carried in the request envelope.
    pub const NAME: &'static str = "delete";

    /// Execute against decoded parameters.
    pub async fn execute(registry: &ClusterRegistry, params: DeleteParams) -> DeleteResponse {
        match registry.delete(&params.id).await {
            Ok(()) => {
                info!("Deleted cluster {}", params.id);
                DeleteResponse {
                    status: Status::Ok,
                    status_message: format!("Successfully deleted cluster {}", params.id),
                }
            }
            Err(e) => DeleteResponse {
                status: e.status(),
                status_message: e.to_string(),
            },
        }
    }

    /// Decode the parameter bag and execute.
    pub async fn handle(registry: &ClusterRegistry, params: Value) -> DeleteResponse {
        match decode_params(params) {
            Ok(params) => Self::execute(registry, params).await,
            Err(e) => {
                warn!("Invalid delete params: {}", e);
                let err = ClusterError::invalid_params(e.to_string());
                DeleteResponse {
                    status: err.status(),
                    status_message: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_delete_removes_record() {
        let registry = ClusterRegistry::new();
        let id = registry.create("prod".to_string(), Vec::new()).await;

        let response = DeleteAction::handle(&registry, json!({"ID": id})).await;
        assert_eq!(response.status, Status::Ok);
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_double_delete_is_not_found() {
        let registry = ClusterRegistry::new();
        let id = registry.create("prod".to_string(), Vec::new()).await;

        let first = DeleteAction::handle(&registry, json!({"ID": id.clone()})).await;
        assert_eq!(first.status, Status::Ok);

        let second = DeleteAction::handle(&registry, json!({"ID": id})).await;
        assert_eq!(second.status, Status::NotFound);
        assert_eq!(second.status_message, "Cluster 0 not found");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let registry = ClusterRegistry::new();
        let response = DeleteAction::handle(&registry, json!({"id": "42"})).await;
        assert_eq!(response.status, Status::NotFound);
    }

    #[tokio::test]
    async fn test_delete_wrong_id_type_is_params_error() {
        let registry = ClusterRegistry::new();
        let response = DeleteAction::handle(&registry, json!({"ID": [1, 2]})).await;
        assert_eq!(response.status, Status::ParamsError);
    }
}
