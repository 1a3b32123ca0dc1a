//! AddJobHandler - Command handler for dispatching a transcoding job.
//!
//! Order of effects: persist the job, announce `jobCreated` to the session
//! room, then hand the job id to the work queue. Nothing is rolled back if a
//! later step fails.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::job::{Job, JobType};
use crate::domain::session::SessionEvent;
use crate::ports::{JobQueue, JobRepository, SessionNotifier};

/// Command to create and enqueue a job.
#[derive(Debug, Clone)]
pub struct AddJobCommand {
    pub session_id: SessionId,
    pub job_type: JobType,
    pub media: Vec<Value>,
}

/// Handler for dispatching jobs.
pub struct AddJobHandler {
    repository: Arc<dyn JobRepository>,
    notifier: Arc<dyn SessionNotifier>,
    queue: Arc<dyn JobQueue>,
    queue_name: String,
}

impl AddJobHandler {
    pub fn new(
        repository: Arc<dyn JobRepository>,
        notifier: Arc<dyn SessionNotifier>,
        queue: Arc<dyn JobQueue>,
        queue_name: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            notifier,
            queue,
            queue_name: queue_name.into(),
        }
    }

    /// Confirm the configured queue exists. Called once at startup.
    pub async fn ensure_queue(&self) -> Result<(), DomainError> {
        self.queue.ensure_exists(&self.queue_name).await?;
        tracing::info!(queue = %self.queue_name, "Job queue ready");
        Ok(())
    }

    pub async fn handle(&self, cmd: AddJobCommand) -> Result<Job, DomainError> {
        let job = Job::new(cmd.session_id, cmd.job_type, cmd.media);

        // 1. Persist
        self.repository
            .save(&job)
            .await
            .map_err(|e| e.masked("Could not create this job."))?;

        // 2. Announce
        self.notifier
            .publish(&cmd.session_id, SessionEvent::JobCreated { id: *job.id() })
            .await;

        // 3. Enqueue
        if let Err(e) = self.queue.enqueue(&self.queue_name, job.id()).await {
            tracing::error!(
                session_id = %cmd.session_id,
                job_id = %job.id(),
                queue = %self.queue_name,
                error = %e,
                "Job stored and announced but not queued; no worker will pick it up"
            );
            return Err(DomainError::storage_failure("Could not queue this job.")
                .with_detail("jobId", job.id().to_string()));
        }

        tracing::info!(
            session_id = %cmd.session_id,
            job_id = %job.id(),
            job_type = %job.job_type(),
            media_count = job.media().len(),
            "Job dispatched"
        );
        Ok(job)
    }
}
