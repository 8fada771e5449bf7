//! Read action - return a snapshot of one cluster.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::rpc::{Status, decode_params};
use crate::domains::cluster::error::ClusterError;
use crate::domains::cluster::model::Cluster;
use crate::domains::cluster::registry::ClusterRegistry;

/// Parameters for the read action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadParams {
    /// ID of the cluster to fetch.
    #[serde(rename = "ID", alias = "id", default)]
    pub id: String,
}

/// Response for the read action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadResponse {
    /// Outcome of the action.
    #[serde(rename = "Status")]
    pub status: Status,

    /// Human-readable outcome description.
    #[serde(rename = "StatusMessage")]
    pub status_message: String,

    /// The requested record; omitted when the lookup failed.
    #[serde(rename = "Cluster", skip_serializing_if = "Option::is_none", default)]
    pub cluster: Option<Cluster>,
}

/// Read action - fetches a snapshot of one cluster record.
pub struct ReadAction;

impl ReadAction {
    /// Action name as carried in the request envelope.
    pub const NAME: &'static str = "read";

    /// Execute against decoded parameters.
    pub async fn execute(registry: &ClusterRegistry, params: ReadParams) -> ReadResponse {
        match registry.get(&params.id).await {
            Ok(cluster) => ReadResponse {
                status: Status::Ok,
                status_message: format!("Found cluster with ID {}", params.id),
                cluster: Some(cluster),
            },
            Err(e) => ReadResponse {
                status: e.status(),
                status_message: e.to_string(),
                cluster: None,
            },
        }
    }

    /// Decode the parameter bag and execute.
    pub async fn handle(registry: &ClusterRegistry, params: Value) -> ReadResponse {
        match decode_params(params) {
            Ok(params) => Self::execute(registry, params).await,
            Err(e) => {
                warn!("Invalid read params: {}", e);
                let err = ClusterError::invalid_params(e.to_string());
                ReadResponse {
                    status: err.status(),
                    status_message: err.to_string(),
                    cluster: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cluster::model::NodeGroup;
    use serde_json::json;

    #[tokio::test]
    async fn test_read_returns_created_record() {
        let registry = ClusterRegistry::new();
        let id = registry
            .create("prod".to_string(), vec![NodeGroup::new("worker", 3)])
            .await;

        let response = ReadAction::handle(&registry, json!({"ID": id})).await;

        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.status_message, "Found cluster with ID 0");
        let cluster = response.cluster.unwrap();
        assert_eq!(cluster.name, "prod");
        assert_eq!(cluster.node_groups, vec![NodeGroup::new("worker", 3)]);
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let registry = ClusterRegistry::new();
        let response = ReadAction::handle(&registry, json!({"id": "99"})).await;

        assert_eq!(response.status, Status::NotFound);
        assert_eq!(response.status_message, "Cluster 99 not found");
        assert!(response.cluster.is_none());
    }

    #[tokio::test]
    async fn test_read_omits_cluster_field_on_failure() {
        let registry = ClusterRegistry::new();
        let response = ReadAction::handle(&registry, json!({"id": "99"})).await;
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["Status"], json!(2));
        assert!(value.get("Cluster").is_none());
    }

    #[tokio::test]
    async fn test_read_wrong_id_type_is_params_error() {
        let registry = ClusterRegistry::new();
        let response = ReadAction::handle(&registry, json!({"ID": 7})).await;
        assert_eq!(response.status, Status::ParamsError);
    }

    #[tokio::test]
    async fn test_read_missing_id_defaults_to_empty() {
        let registry = ClusterRegistry::new();
        let response = ReadAction::handle(&registry, json!({})).await;

        // Tolerant decode: the missing field defaults, then the lookup fails.
        assert_eq!(response.status, Status::NotFound);
        assert_eq!(response.status_message, "Cluster  not found");
    }
}
