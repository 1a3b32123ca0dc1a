//! UpdateJobHandler - Command handler for worker status reports.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, JobId};
use crate::domain::job::{Job, JobUpdate};
use crate::ports::JobRepository;

/// Command to update a job. Only `status` is writable.
#[derive(Debug, Clone)]
pub struct UpdateJobCommand {
    pub job_id: String,
    pub update: JobUpdate,
}

/// Handler for job updates.
pub struct UpdateJobHandler {
    repository: Arc<dyn JobRepository>,
}

impl UpdateJobHandler {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateJobCommand) -> Result<Job, DomainError> {
        let id = JobId::require(&cmd.job_id)?;

        let job = self
            .repository
            .update(&id, &cmd.update)
            .await
            .map_err(|e| e.masked("Could not get this job."))?
            .ok_or_else(|| DomainError::not_found("Job", id))?;

        tracing::info!(
            job_id = %id,
            status = job.status().unwrap_or_default(),
            "Job updated"
        );
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{ErrorCode, SessionId};
    use crate::domain::job::JobType;

    #[tokio::test]
    async fn updates_status_only() {
        let store = Arc::new(InMemoryStore::new());
        let job = Job::new(SessionId::new(), JobType::Mobile, vec![]);
        JobRepository::save(&*store, &job).await.unwrap();

        // Fields other than status never reach the handler.
        let update: JobUpdate =
            serde_json::from_str(r#"{"status":"done","type":"Desktop","media":[]}"#).unwrap();
        let updated = UpdateJobHandler::new(store)
            .handle(UpdateJobCommand {
                job_id: job.id().to_string(),
                update,
            })
            .await
            .unwrap();

        assert_eq!(updated.status(), Some("done"));
        assert_eq!(updated.job_type(), JobType::Mobile);
    }

    #[tokio::test]
    async fn missing_job_is_not_found() {
        let err = UpdateJobHandler::new(Arc::new(InMemoryStore::new()))
            .handle(UpdateJobCommand {
                job_id: JobId::new().to_string(),
                update: JobUpdate::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
