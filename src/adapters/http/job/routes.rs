//! HTTP routes for job endpoints.

use axum::{routing::get, Router};

use crate::application::Services;

use super::handlers::{get_job, update_job};

/// Creates the job router, mounted at `/api/jobs`.
pub fn job_routes() -> Router<Services> {
    Router::new().route("/:id", get(get_job).put(update_job))
}
