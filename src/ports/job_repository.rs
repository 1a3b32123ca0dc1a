//! Job repository port.

use crate::domain::foundation::{DomainError, JobId, SessionId};
use crate::domain::job::{Job, JobUpdate};
use async_trait::async_trait;

/// Repository port for transcoding jobs.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Save a new job.
    async fn save(&self, job: &Job) -> Result<(), DomainError>;

    /// Find a job by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, DomainError>;

    /// All jobs of a session. No ordering is guaranteed.
    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Job>, DomainError>;

    /// Apply a partial update in place and return the updated record.
    ///
    /// Returns `None` if the job does not exist.
    async fn update(&self, id: &JobId, update: &JobUpdate) -> Result<Option<Job>, DomainError>;
}
