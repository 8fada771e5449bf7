//! Cluster dispatch - closed action-name routing for the cluster resource.
//!
//! One match arm per action; the set of actions is fixed at compile time.
//! Unknown names surface as a dispatch error for the transport to report.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::core::rpc::{DispatchError, ResourceDispatcher};

use super::actions::{CreateAction, DeleteAction, ListAction, ReadAction, UpdateAction};
use super::registry::ClusterRegistry;

/// Action dispatcher for the cluster resource.
pub struct ClusterDispatcher {
    registry: Arc<ClusterRegistry>,
}

impl ClusterDispatcher {
    /// Path segment the cluster resource is mounted under.
    pub const RESOURCE: &'static str = "cluster";

    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<ClusterRegistry>) -> Self {
        Self { registry }
    }

    /// The registry backing this dispatcher.
    pub fn registry(&self) -> &Arc<ClusterRegistry> {
        &self.registry
    }
}

#[async_trait]
impl ResourceDispatcher for ClusterDispatcher {
    fn resource(&self) -> &'static str {
        Self::RESOURCE
    }

    fn action_names(&self) -> Vec<&'static str> {
        vec![
            CreateAction::NAME,
            ReadAction::NAME,
            UpdateAction::NAME,
            DeleteAction::NAME,
            ListAction::NAME,
        ]
    }

    async fn dispatch(&self, action: &str, params: Value) -> Result<Value, DispatchError> {
        match action {
            CreateAction::NAME => Ok(serde_json::to_value(
                CreateAction::handle(&self.registry, params).await,
            )?),
            ReadAction::NAME => Ok(serde_json::to_value(
                ReadAction::handle(&self.registry, params).await,
            )?),
            UpdateAction::NAME => Ok(serde_json::to_value(
                UpdateAction::handle(&self.registry, params).await,
            )?),
            DeleteAction::NAME => Ok(serde_json::to_value(
                DeleteAction::handle(&self.registry, params).await,
            )?),
            ListAction::NAME => Ok(serde_json::to_value(
                ListAction::handle(&self.registry, params).await,
            )?),
            _ => {
                warn!("Unknown action requested: {}", action);
                Err(DispatchError::unknown_action(Self::RESOURCE, action))
            }
        }
    }
}
