//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with handlers and routes:
//! - `session` - mounted at `/api/session`
//! - `job` - mounted at `/api/jobs`
//!
//! [`app_router`] assembles them with the WebSocket endpoint, the health
//! check and the tower-http middleware stack.

pub mod error;
pub mod job;
pub mod session;

pub use error::{handle_domain_error, ErrorResponse};
pub use job::job_routes;
pub use session::session_routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::websocket::{websocket_router, RoomManager, WebSocketState};
use crate::application::Services;
use crate::config::ServerConfig;

/// Build the full application router.
pub fn app_router(services: Services, rooms: Arc<RoomManager>, server: &ServerConfig) -> Router {
    let api = Router::new()
        .nest("/api/session", session_routes())
        .nest("/api/jobs", job_routes())
        .with_state(services);

    Router::new()
        .route("/health", get(health_check))
        .merge(api)
        .merge(websocket_router().with_state(WebSocketState::new(rooms)))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins; any origin when none are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(allowed))
    }
}

/// GET /health - Liveness
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
