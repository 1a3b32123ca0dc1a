//! HTTP handlers for job endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_body_rejection, handle_domain_error};
use crate::application::handlers::UpdateJobCommand;
use crate::application::Services;
use crate::domain::job::JobUpdate;

/// GET /api/jobs/:id - Get a job
pub async fn get_job(State(services): State<Services>, Path(job_id): Path<String>) -> Response {
    match services.get_job.handle(&job_id).await {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// PUT /api/jobs/:id - Worker status update
pub async fn update_job(
    State(services): State<Services>,
    Path(job_id): Path<String>,
    body: Result<Json<JobUpdate>, JsonRejection>,
) -> Response {
    let Json(update) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_body_rejection(rejection),
    };

    let cmd = UpdateJobCommand { job_id, update };
    match services.update_job.handle(cmd).await {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
