//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::Services;

use super::handlers::{
    add_media, create_session, get_session, get_session_by_code, list_session_jobs,
    list_session_media, register_source, start_recording, stop_recording, update_session,
};

/// Creates the session router, mounted at `/api/session`.
pub fn session_routes() -> Router<Services> {
    Router::new()
        .route("/", post(create_session))
        .route("/code/:code", get(get_session_by_code))
        .route("/:id", get(get_session).patch(update_session))
        .route("/:id/sources", post(register_source))
        .route("/:id/media", post(add_media).get(list_session_media))
        .route("/:id/start", post(start_recording))
        .route("/:id/stop", post(stop_recording))
        .route("/:id/jobs", get(list_session_jobs))
}
