//! Cluster RPC Server Library
//!
//! This crate provides an HTTP-based RPC server exposing CRUD-style actions
//! against an in-memory collection of cluster resources. Requests are
//! dispatched by the `Action` field of the JSON envelope rather than by HTTP
//! verb or path semantics:
//!
//! ```json
//! { "Action": "create", "Params": { "Name": "prod", "NodeGroups": [] } }
//! ```
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the RPC protocol types, server composition, and the HTTP transport
//! - **domains**: Business logic organized by resource
//!   - **cluster**: The cluster resource: records, registry, and actions
//!
//! # Example
//!
//! ```rust,no_run
//! use cluster_rpc_server::{Config, RpcServer};
//! use cluster_rpc_server::core::HttpTransport;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = RpcServer::new(config.clone());
//!     HttpTransport::new(config.http).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, RpcServer};
