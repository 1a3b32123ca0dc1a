//! HTTP handlers for session endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::adapters::http::error::{handle_body_rejection, handle_domain_error};
use crate::application::handlers::{
    AddAllMediaCommand, GetSessionQuery, RecordingAction, RegisterSourceCommand,
    SetRecordingCommand, UpdateSessionCommand,
};
use crate::application::Services;
use crate::domain::session::SessionUpdate;
use crate::domain::source::SourceDraft;

// ════════════════════════════════════════════════════════════════════════════
// Session lifecycle
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/session - Create a new session
pub async fn create_session(State(services): State<Services>) -> Response {
    match services.create_session.handle().await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/session/:id - Session with its sources
pub async fn get_session(
    State(services): State<Services>,
    Path(session_id): Path<String>,
) -> Response {
    match services
        .get_session
        .handle(GetSessionQuery::ById(session_id))
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/session/code/:code - Session by join code
pub async fn get_session_by_code(
    State(services): State<Services>,
    Path(code): Path<String>,
) -> Response {
    match services
        .get_session
        .handle(GetSessionQuery::ByCode(code))
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// PATCH /api/session/:id - Update layout and/or status
pub async fn update_session(
    State(services): State<Services>,
    Path(session_id): Path<String>,
    body: Result<Json<SessionUpdate>, JsonRejection>,
) -> Response {
    let Json(update) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };

    let cmd = UpdateSessionCommand { session_id, update };
    match services.update_session.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/session/:id/start - Start recording
pub async fn start_recording(
    State(services): State<Services>,
    Path(session_id): Path<String>,
) -> Response {
    set_recording(services, session_id, RecordingAction::Start).await
}

/// POST /api/session/:id/stop - Stop recording
pub async fn stop_recording(
    State(services): State<Services>,
    Path(session_id): Path<String>,
) -> Response {
    set_recording(services, session_id, RecordingAction::Stop).await
}

async fn set_recording(services: Services, session_id: String, action: RecordingAction) -> Response {
    let cmd = SetRecordingCommand { session_id, action };
    match services.set_recording.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Sources, media and jobs of a session
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/session/:id/sources - Register a capture source
pub async fn register_source(
    State(services): State<Services>,
    Path(session_id): Path<String>,
    body: Result<Json<SourceDraft>, JsonRejection>,
) -> Response {
    let Json(source) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };

    let cmd = RegisterSourceCommand { session_id, source };
    match services.register_source.handle(cmd).await {
        Ok(source) => (StatusCode::OK, Json(source)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/session/:id/media - Store a batch of segments and dispatch a job
///
/// Only the outer array is checked here; each element is read on its own so
/// one malformed segment cannot reject the batch.
pub async fn add_media(
    State(services): State<Services>,
    Path(session_id): Path<String>,
    body: Result<Json<Vec<Value>>, JsonRejection>,
) -> Response {
    let Json(media) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };

    let cmd = AddAllMediaCommand { session_id, media };
    match services.add_all_media.handle(cmd).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/session/:id/media - Segments stored for a session
pub async fn list_session_media(
    State(services): State<Services>,
    Path(session_id): Path<String>,
) -> Response {
    match services.get_session_media.handle(&session_id).await {
        Ok(media) => (StatusCode::OK, Json(media)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/session/:id/jobs - Jobs dispatched for a session
pub async fn list_session_jobs(
    State(services): State<Services>,
    Path(session_id): Path<String>,
) -> Response {
    match services.get_session_jobs.handle(&session_id).await {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
