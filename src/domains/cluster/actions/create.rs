//! Create action - store a new cluster and return its generated ID.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::core::rpc::{Status, decode_params};
use crate::domains::cluster::error::ClusterError;
use crate::domains::cluster::model::NodeGroup;
use crate::domains::cluster::registry::ClusterRegistry;

/// Parameters for the create action.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateParams {
    /// Display name for the new cluster. Duplicate names are allowed.
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,

    /// Initial node groups.
    #[serde(rename = "NodeGroups", alias = "nodeGroups", default)]
    pub node_groups: Vec<NodeGroup>,
}

/// Response for the create action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponse {
    /// Outcome of the action.
    #[serde(rename = "Status")]
    pub status: Status,

    /// Human-readable outcome description.
    #[serde(rename = "StatusMessage")]
    pub status_message: String,

    /// ID assigned to the new cluster; empty on failure.
    #[serde(rename = "ClusterID", default)]
    pub cluster_id: String,
}

/// Create action - stores a new cluster record.
pub struct CreateAction;

impl CreateAction {
    /// Action name as carried in the request envelope.
    pub const NAME: &'static str = "create";

    /// Execute against decoded parameters. Always succeeds.
    pub async fn execute(registry: &ClusterRegistry, params: CreateParams) -> CreateResponse {
        let id = registry.create(params.name, params.node_groups).await;
        info!("Created cluster {}", id);
        CreateResponse {
            status: Status::Ok,
            status_message: format!("Successfully created cluster {}", id),
            cluster_id: id,
        }
    }

    /// Decode the parameter bag and execute.
    pub async fn handle(registry: &ClusterRegistry, params: Value) -> CreateResponse {
        match decode_params(params) {
            Ok(params) => Self::execute(registry, params).await,
            Err(e) => {
                warn!("Invalid create params: {}", e);
                let err = ClusterError::invalid_params(e.to_string());
                CreateResponse {
                    status: err.status(),
                    status_message: err.to_string(),
                    cluster_id: String::new(),
                }
            }
        }
    }
}
