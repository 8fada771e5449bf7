//! Transport layer for the RPC server.
//!
//! The server speaks JSON envelopes over HTTP. This module handles the
//! listener lifecycle and delegates envelope processing to the RPC server.

mod config;
mod error;

pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
