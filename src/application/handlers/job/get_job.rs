//! Job query handlers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, JobId, SessionId};
use crate::domain::job::Job;
use crate::ports::JobRepository;

/// Handler for a single job.
pub struct GetJobHandler {
    repository: Arc<dyn JobRepository>,
}

impl GetJobHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, job_id: &str) -> Result<Job, DomainError> {
        let id = JobId::require(job_id)?;
        self.repository
            .find_by_id(&id)
            .await
            .map_err(|e| e.masked("Could not get this job."))?
            .ok_or_else(|| DomainError::not_found("Job", id))
    }
}

/// Handler for all jobs of a session.
pub struct GetSessionJobsHandler {
    repository: Arc<dyn JobRepository>,
}

impl GetSessionJobsHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    /// No ordering is guaranteed.
    pub async fn handle(&self, session_id: &str) -> Result<Vec<Job>, DomainError> {
        let session_id = SessionId::require(session_id)?;
        self.repository
            .find_by_session(&session_id)
            .await
            .map_err(|e| e.masked("Could not get this job."))
    }
}
