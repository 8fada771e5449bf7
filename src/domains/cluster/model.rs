//! Cluster record and wire types.
//!
//! Responses serialize field names in PascalCase; decoding also accepts the
//! camelCase spellings used by older clients.

use serde::{Deserialize, Serialize};

/// A cluster record: a named collection of node groups, keyed by a generated
/// ID that never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// Display name, set at creation. `update` never touches it.
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    /// Opaque decimal identifier assigned by the registry.
    #[serde(rename = "ID", alias = "id")]
    pub id: String,

    /// The cluster's node groups, replaced wholesale by `update`.
    #[serde(rename = "NodeGroups", alias = "nodeGroups", default)]
    pub node_groups: Vec<NodeGroup>,
}

/// A named, counted sub-allocation belonging to a cluster.
///
/// Node groups have no identity of their own; their lifecycle is bound to
/// the parent record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeGroup {
    /// Type label for the group.
    #[serde(rename = "Type", alias = "type", default)]
    pub kind: String,

    /// Number of nodes in the group.
    #[serde(rename = "Count", alias = "count", default)]
    pub count: u64,
}

impl NodeGroup {
    /// Create a node group.
    pub fn new(kind: impl Into<String>, count: u64) -> Self {
        Self {
            kind: kind.into(),
            count,
        }
    }
}
