//! JobQueue port - hand-off of dispatched jobs to transcoding workers.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, JobId};

/// Port for the external work queue.
///
/// Messages are bare job ids; workers load the job record themselves.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Make sure the named queue exists, creating it if needed.
    ///
    /// Called once at process start; failure aborts startup.
    async fn ensure_exists(&self, queue: &str) -> Result<(), DomainError>;

    /// Append a job id to the named queue.
    ///
    /// # Errors
    ///
    /// - `StorageFailure` if the queue is unreachable or does not exist
    async fn enqueue(&self, queue: &str, job_id: &JobId) -> Result<(), DomainError>;
}
