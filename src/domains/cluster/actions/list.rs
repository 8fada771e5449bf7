//! List action - return every current cluster record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::rpc::{Status, decode_params};
use crate::domains::cluster::error::ClusterError;
use crate::domains::cluster::model::Cluster;
use crate::domains::cluster::registry::ClusterRegistry;

/// Parameters for the list action. The action takes none; the empty shape
/// still goes through the tolerant decode so a malformed bag reports the
/// same way as everywhere else.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {}

/// Response for the list action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// Outcome of the action.
    #[serde(rename = "Status")]
    pub status: Status,

    /// Human-readable outcome description.
    #[serde(rename = "StatusMessage")]
    pub status_message: String,

    /// Every current record, in unspecified order; omitted when empty.
    #[serde(rename = "Clusters", skip_serializing_if = "Vec::is_empty", default)]
    pub clusters: Vec<Cluster>,
}

/// List action - snapshots the whole registry.
pub struct ListAction;

impl ListAction {
    /// Action name as carried in the request envelope.
    pub const NAME: &'static str = "list";

    /// Execute against decoded parameters.
    pub async fn execute(registry: &ClusterRegistry, _params: ListParams) -> ListResponse {
        let clusters = registry.list().await;
        ListResponse {
            status: Status::Ok,
            status_message: format!("Found {} clusters", clusters.len()),
            clusters,
        }
    }

    /// Decode the parameter bag and execute.
    pub async fn handle(registry: &ClusterRegistry, params: Value) -> ListResponse {
        match decode_params(params) {
            Ok(params) => Self::execute(registry, params).await,
            Err(e) => {
                warn!("Invalid list params: {}", e);
                let err = ClusterError::invalid_params(e.to_string());
                ListResponse {
                    status: err.status(),
                    status_message: err.to_string(),
                    clusters: Vec::new(),
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
    async fn test_list_returns_surviving_records() {
        let registry = ClusterRegistry::new();
        let a = registry.create("a".to_string(), Vec::new()).await;
        let b = registry.create("b".to_string(), Vec::new()).await;
        registry.delete(&a).await.unwrap();

        let response = ListAction::handle(&registry, json!({})).await;

        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.status_message, "Found 1 clusters");
        assert_eq!(response.clusters.len(), 1);
        assert_eq!(response.clusters[0].id, b);
    }

    #[tokio::test]
    async fn test_list_tolerates_unknown_fields() {
        let registry = ClusterRegistry::new();
        let response = ListAction::handle(&registry, json!({"page": 3})).await;
        assert_eq!(response.status, Status::Ok);
    }

    #[tokio::test]
    async fn test_list_tolerates_null_params() {
        let registry = ClusterRegistry::new();
        let response = ListAction::handle(&registry, Value::Null).await;
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.status_message, "Found 0 clusters");
    }

    #[tokio::test]
    async fn test_empty_list_omits_clusters_field() {
        let registry = ClusterRegistry::new();
        let response = ListAction::handle(&registry, json!({})).await;
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["Status"], json!(0));
        assert!(value.get("Clusters").is_none());
    }

    #[tokio::test]
    async fn test_non_object_params_is_params_error() {
        let registry = ClusterRegistry::new();
        let response = ListAction::handle(&registry, json!("everything")).await;
        assert_eq!(response.status, Status::ParamsError);
    }
}
