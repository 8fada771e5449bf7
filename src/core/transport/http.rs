//! HTTP transport implementation.
//!
//! One listener serves every resource module. Requests to `/{resource}`
//! carry the action envelope in the body; the HTTP method is deliberately
//! not checked, since dispatch is driven entirely by the `Action` field.
//!
//! Transport-level failures (unreadable envelope, unknown resource or
//! action) are reported through HTTP status codes with a structured
//! `{"error"}` body. Domain outcomes stay in-band: decode failures and
//! missing records arrive as `Status` codes behind HTTP 200.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get},
};
use bytes::Bytes;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, instrument, warn};

use super::config::HttpConfig;
use super::error::{TransportError, TransportResult};
use crate::core::rpc::{DispatchError, Envelope};
use crate::core::server::RpcServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    /// The RPC server instance.
    server: RpcServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport.
    ///
    /// This method blocks until the listener shuts down.
    pub async fn run(self, server: RpcServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (action RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → RPC:    POST /{{resource}}");
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the axum router over the server's resource table.
pub fn build_router(server: RpcServer, enable_cors: bool) -> Router {
    let state = AppState { server };

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .route("/{resource}", any(handle_rpc))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    let resources: Vec<_> = state
        .server
        .action_inventory()
        .into_iter()
        .map(|(resource, actions)| {
            serde_json::json!({
                "path": format!("/{}", resource),
                "actions": actions,
            })
        })
        .collect();

    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "protocol": "action RPC over HTTP",
        "resources": resources,
        "documentation": "Send requests to /{resource} with a JSON body of the form {\"Action\": ..., \"Params\": ...}"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle an RPC envelope addressed to one resource module.
#[instrument(skip_all, fields(resource = tracing::field::Empty, action = tracing::field::Empty))]
async fn handle_rpc(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    body: Bytes,
) -> Response {
    tracing::Span::current().record("resource", resource.as_str());

    let envelope: Envelope = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("Invalid request envelope: {}", e);
            return error_body(
                StatusCode::BAD_REQUEST,
                format!("Invalid request envelope: {}", e),
            );
        }
    };

    tracing::Span::current().record("action", envelope.action.as_str());
    info!("Received RPC request: {}/{}", resource, envelope.action);

    match state
        .server
        .dispatch(&resource, &envelope.action, envelope.params)
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e @ DispatchError::UnknownResource(_)) => error_body(StatusCode::NOT_FOUND, e.to_string()),
        Err(e @ DispatchError::UnknownAction { .. }) => {
            error_body(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(DispatchError::Serialize(e)) => {
            error!("Error serializing response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Structured error body for transport-level failures.
fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
