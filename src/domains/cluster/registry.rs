//! Cluster registry - the in-memory keyed store and ID counter.
//!
//! The registry is the only long-lived owner of cluster records; readers get
//! snapshot clones. The record map and the ID counter live behind a single
//! lock so concurrent creates can never hand out duplicate IDs or tear the
//! counter.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use super::error::ClusterError;
use super::model::{Cluster, NodeGroup};

/// In-memory store of cluster records keyed by generated ID.
pub struct ClusterRegistry {
    inner: RwLock<RegistryInner>,
}

/// Map and counter guarded together. The counter is strictly greater than
/// every ID issued so far and never decreases; deletes do not release IDs.
#[derive(Default)]
struct RegistryInner {
    clusters: HashMap<String, Cluster>,
    next_id: u64,
}

impl ClusterRegistry {
    /// Create an empty registry. IDs start at 0.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::default()),
        }
    }

    /// Store a new cluster and return its generated ID.
    ///
    /// Always succeeds; duplicate names are allowed. The counter advances
    /// exactly once per call.
    pub async fn create(&self, name: String, node_groups: Vec<NodeGroup>) -> String {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.to_string();
        inner.next_id += 1;
        inner.clusters.insert(
            id.clone(),
            Cluster {
                name,
                id: id.clone(),
                node_groups,
            },
        );
        debug!("Created cluster {}", id);
        id
    }

    /// Return a snapshot of the cluster with the given ID.
    pub async fn get(&self, id: &str) -> Result<Cluster, ClusterError> {
        let inner = self.inner.read().await;
        inner
            .clusters
            .get(id)
            .cloned()
            .ok_or_else(|| ClusterError::not_found(id))
    }

    /// Replace the node groups of an existing cluster wholesale.
    ///
    /// The cluster's name is untouched.
    pub async fn update(&self, id: &str, node_groups: Vec<NodeGroup>) -> Result<(), ClusterError> {
        let mut inner = self.inner.write().await;
        match inner.clusters.get_mut(id) {
            Some(cluster) => {
                cluster.node_groups = node_groups;
                Ok(())
            }
            None => Err(ClusterError::not_found(id)),
        }
    }

    /// Remove the cluster with the given ID.
    pub async fn delete(&self, id: &str) -> Result<(), ClusterError> {
        let mut inner = self.inner.write().await;
        match inner.clusters.remove(id) {
            Some(_) => {
                debug!("Deleted cluster {}", id);
                Ok(())
            }
            None => Err(ClusterError::not_found(id)),
        }
    }

    /// Snapshots of every current record. Iteration order is unspecified.
    pub async fn list(&self) -> Vec<Cluster> {
        let inner = self.inner.read().await;
        inner.clusters.values().cloned().collect()
    }

    /// Number of records currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.clusters.len()
    }

    /// Whether the registry holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ClusterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
