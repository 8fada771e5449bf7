//! Cluster resource domain.
//!
//! A cluster is a named record composed of node groups with counts, stored
//! in a process-local registry keyed by generated ID.
//!
//! ## Architecture
//!
//! - `actions/` - Individual action implementations (one file per action)
//! - `dispatch.rs` - Closed action-name dispatch over the registry
//! - `registry.rs` - The in-memory keyed store and ID counter
//! - `model.rs` - Record and wire types
//! - `error.rs` - Cluster-specific error types
//!
//! ## Adding a New Action
//!
//! 1. Create a new file in `actions/` (e.g., `rename.rs`)
//! 2. Define params, response, `execute()` and `handle()`
//! 3. Export in `actions/mod.rs`
//! 4. Add a match arm in `dispatch.rs`

pub mod actions;
mod dispatch;
mod error;
mod model;
mod registry;

pub use dispatch::ClusterDispatcher;
pub use error::ClusterError;
pub use model::{Cluster, NodeGroup};
pub use registry::ClusterRegistry;
