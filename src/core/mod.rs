//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the RPC server,
//! including error handling, configuration, the RPC protocol types, server
//! composition, and the HTTP transport layer.

pub mod config;
pub mod error;
pub mod rpc;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use rpc::{DispatchError, Envelope, ResourceDispatcher, Status};
pub use server::RpcServer;
pub use transport::{HttpConfig, HttpTransport};
