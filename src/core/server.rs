//! RPC server composition and envelope routing.
//!
//! The server owns the process-wide resource table mapping a path segment to
//! its action dispatcher. Resources are mounted by explicit construction in
//! [`RpcServer::new`] rather than by startup-time side effects, so the
//! composition is visible in one place. Registration order is irrelevant;
//! paths are disjoint.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use super::config::Config;
use super::rpc::{DispatchError, ResourceDispatcher};
use crate::domains::cluster::{ClusterDispatcher, ClusterRegistry};

/// The main RPC server.
///
/// Holds the configuration and the table of mounted resource modules. The
/// transport resolves a request's path segment through [`RpcServer::dispatch`].
#[derive(Clone)]
pub struct RpcServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Resource table: path segment -> action dispatcher.
    resources: Arc<HashMap<&'static str, Arc<dyn ResourceDispatcher>>>,
}

impl RpcServer {
    /// Create a new RPC server with the given configuration.
    ///
    /// Every resource module is constructed and mounted here.
    pub fn new(config: Config) -> Self {
        let cluster = ClusterDispatcher::new(Arc::new(ClusterRegistry::new()));

        let mut resources: HashMap<&'static str, Arc<dyn ResourceDispatcher>> = HashMap::new();
        resources.insert(cluster.resource(), Arc::new(cluster));

        Self {
            config: Arc::new(config),
            resources: Arc::new(resources),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Names of all mounted resources, sorted.
    pub fn resource_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.resources.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Action names per mounted resource, sorted by resource name.
    pub fn action_inventory(&self) -> Vec<(&'static str, Vec<&'static str>)> {
        let mut inventory: Vec<_> = self
            .resources
            .iter()
            .map(|(name, dispatcher)| (*name, dispatcher.action_names()))
            .collect();
        inventory.sort_unstable_by_key(|(name, _)| *name);
        inventory
    }

    /// Route an envelope to the resource mounted at `resource`.
    pub async fn dispatch(
        &self,
        resource: &str,
        action: &str,
        params: Value,
    ) -> Result<Value, DispatchError> {
        let Some(dispatcher) = self.resources.get(resource) else {
            warn!("Unknown resource requested: {}", resource);
            return Err(DispatchError::unknown_resource(resource));
        };
        dispatcher.dispatch(action, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_server() -> RpcServer {
        RpcServer::new(Config::default())
    }

    #[test]
    fn test_cluster_resource_mounted() {
        let server = test_server();
        assert_eq!(server.resource_names(), vec!["cluster"]);
    }

    #[test]
    fn test_action_inventory() {
        let server = test_server();
        let inventory = server.action_inventory();
        assert_eq!(inventory.len(), 1);
        let (resource, actions) = &inventory[0];
        assert_eq!(*resource, "cluster");
        assert_eq!(actions.len(), 5);
        assert!(actions.contains(&"create"));
        assert!(actions.contains(&"list"));
    }

    #[tokio::test]
    async fn test_dispatch_reaches_cluster_handler() {
        let server = test_server();
        let response = server
            .dispatch("cluster", "create", json!({"Name": "prod"}))
            .await
            .unwrap();
        assert_eq!(response["Status"], json!(0));
        assert_eq!(response["ClusterID"], json!("0"));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_resource() {
        let server = test_server();
        let result = server.dispatch("volume", "create", json!({})).await;
        assert!(matches!(result, Err(DispatchError::UnknownResource(_))));
    }

    #[tokio::test]
    async fn test_dispatch_state_is_shared_across_clones() {
        let server = test_server();
        let clone = server.clone();
        clone
            .dispatch("cluster", "create", json!({"Name": "a"}))
            .await
            .unwrap();
        let response = server
            .dispatch("cluster", "read", json!({"ID": "0"}))
            .await
            .unwrap();
        assert_eq!(response["Status"], json!(0));
    }
}
