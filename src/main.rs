//! Cluster RPC Server Entry Point
//!
//! This is the main entry point for the RPC server. It initializes logging,
//! loads configuration, composes the resource modules, and starts the HTTP
//! transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use cluster_rpc_server::core::config::LoggingConfig;
use cluster_rpc_server::core::{Config, HttpTransport, RpcServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Compose the server with its resource modules
    let server = RpcServer::new(config.clone());

    info!(
        "Server initialized with resources: {}",
        server.resource_names().join(", ")
    );

    // Run the HTTP transport
    let transport = HttpTransport::new(config.http);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(config: &LoggingConfig) {
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
