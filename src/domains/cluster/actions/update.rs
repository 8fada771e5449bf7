//! Update action - replace a cluster's node groups wholesale.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::core::rpc::{Status, decode_params};
use crate::domains::cluster::error::ClusterError;
use crate::domains::cluster::model::NodeGroup;
use crate::domains::cluster::registry::ClusterRegistry;

/// Parameters for the update action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateParams {
    /// ID of the cluster to update.
    #[serde(rename = "ID", alias = "id", default)]
    pub id: String,

    /// Replacement node groups. The cluster's name is never changed here.
    #[serde(rename = "NodeGroups", alias = "nodeGroups", default)]
    pub node_groups: Vec<NodeGroup>,
}

/// Response for the update action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    /// Outcome of the action.
    #[serde(rename = "Status")]
    pub status: Status,

    /// Human-readable outcome description.
    #[serde(rename = "StatusMessage")]
    pub status_message: String,
}

/// Update action - replaces the node-group list of one cluster.
pub struct UpdateAction;

impl UpdateAction {
    /// Action name as carried in the request envelope.
    pub const NAME: &'static str = "update";

    /// Execute against decoded parameters.
    pub async fn execute(registry: &ClusterRegistry, params: UpdateParams) -> UpdateResponse {
        match registry.update(&params.id, params.node_groups).await {
            Ok(()) => {
                info!("Updated cluster {}", params.id);
                UpdateResponse {
                    status: Status::Ok,
                    status_message: format!("Successfully updated cluster {}", params.id),
                }
            }
            Err(e) => UpdateResponse {
                status: e.status(),
                status_message: e.to_string(),
            },
        }
    }

    /// Decode the parameter bag and execute.
    pub async fn handle(registry: &ClusterRegistry, params: Value) -> UpdateResponse {
        match decode_params(params) {
            Ok(params) => Self::execute(registry, params).await,
            Err(e) => {
                warn!("Invalid update params: {}", e);
                let err = ClusterError::invalid_params(e.to_string());
                UpdateResponse {
                    status: err.status(),
                    status_message: err.to_string(),
                }
            }
        }
    }
}
