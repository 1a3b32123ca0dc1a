//! AddAllMediaHandler - Command handler for a batch upload.
//!
//! Every segment is read, validated and stored independently and
//! concurrently; failures do not stop the others, including elements whose
//! JSON does not have the shape of a segment. Once all attempts have
//! settled, exactly one `Mobile` job is dispatched carrying the whole batch
//! as submitted.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;

use crate::application::handlers::job::{AddJobCommand, AddJobHandler};
use crate::domain::foundation::{DomainError, MediaId, SessionId};
use crate::domain::job::{Job, JobType};
use crate::domain::media::MediaSegment;

use super::AddMediaHandler;

/// Command to store a batch of segments and dispatch a job for it.
#[derive(Debug, Clone)]
pub struct AddAllMediaCommand {
    pub session_id: String,
    /// Elements of the uploaded array, unparsed.
    pub media: Vec<Value>,
}

/// Per-item failure in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeFailure {
    /// Position in the submitted list.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub error: String,
    pub message: String,
}

/// Outcome of a batch upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeReport {
    pub job: Job,
    pub persisted: Vec<MediaId>,
    pub failed: Vec<IntakeFailure>,
}

/// Handler for batch uploads.
pub struct AddAllMediaHandler {
    media: Arc<AddMediaHandler>,
    jobs: Arc<AddJobHandler>,
}

impl AddAllMediaHandler {
    pub fn new(media: Arc<AddMediaHandler>, jobs: Arc<AddJobHandler>) -> Self {
        Self { media, jobs }
    }

    pub async fn handle(&self, cmd: AddAllMediaCommand) -> Result<IntakeReport, DomainError> {
        let session_id = SessionId::require(&cmd.session_id)?;

        let segments: Vec<MediaSegment> = cmd.media.iter().map(MediaSegment::from_value).collect();
        let outcomes = join_all(
            segments
                .iter()
                .map(|segment| self.media.persist(session_id, segment)),
        )
        .await;

        let mut persisted = Vec::new();
        let mut failed = Vec::new();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(media) => persisted.push(media.id),
                Err(e) => {
                    tracing::warn!(
                        session_id = %session_id,
                        index,
                        error = %e,
                        "Media segment rejected"
                    );
                    failed.push(IntakeFailure {
                        index,
                        id: segments[index].id.clone(),
                        error: e.code.to_string(),
                        message: e.message,
                    });
                }
            }
        }

        let job = self
            .jobs
            .handle(AddJobCommand {
                session_id,
                job_type: JobType::Mobile,
                media: cmd.media,
            })
            .await?;

        tracing::info!(
            session_id = %session_id,
            job_id = %job.id(),
            persisted = persisted.len(),
            failed = failed.len(),
            "Media batch accepted"
        );

        Ok(IntakeReport {
            job,
            persisted,
            failed,
        })
    }
}
