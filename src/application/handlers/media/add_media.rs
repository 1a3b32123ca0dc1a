//! AddMediaHandler - Command handler for persisting one uploaded media segment.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::media::{Media, MediaSegment};
use crate::ports::MediaRepository;

/// Command to store a single segment.
#[derive(Debug, Clone)]
pub struct AddMediaCommand {
    pub session_id: String,
    pub media: MediaSegment,
}

/// Handler for storing media segments.
pub struct AddMediaHandler {
    repository: Arc<dyn MediaRepository>,
}

impl AddMediaHandler {
    pub fn new(repository: Arc<dyn MediaRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddMediaCommand) -> Result<Media, DomainError> {
        let session_id = SessionId::require(&cmd.session_id)?;
        self.persist(session_id, &cmd.media).await
    }

    /// Validate and store a segment for an already parsed session id.
    pub(crate) async fn persist(
        &self,
        session_id: SessionId,
        segment: &MediaSegment,
    ) -> Result<Media, DomainError> {
        let media = segment.validate(session_id)?;

        self.repository
            .insert(&media)
            .await
            .map_err(|e| e.masked("Could not create this media."))?;

        tracing::debug!(
            session_id = %session_id,
            media_id = %media.id,
            duration = media.duration,
            "Media stored"
        );
        Ok(media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::ErrorCode;

    fn segment() -> MediaSegment {
        MediaSegment {
            id: Some("seg-1".to_string()),
            uploaded_url: Some("https://cdn.example/seg-1.webm".to_string()),
            start_time: Some(1_000),
            end_time: Some(4_000),
            duration: Some(3_000),
            mode: Some("Facecam".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn stores_valid_segment() {
        let store = Arc::new(InMemoryStore::new());
        let session_id = SessionId::new();

        let media = AddMediaHandler::new(store.clone())
            .handle(AddMediaCommand {
                session_id: session_id.to_string(),
                media: segment(),
            })
            .await
            .unwrap();

        assert_eq!(media.session_id, session_id);
        assert_eq!(store.media_count().await, 1);
    }

    #[tokio::test]
    async fn zero_duration_is_missing_duration() {
        let store = Arc::new(InMemoryStore::new());
        let err = AddMediaHandler::new(store.clone())
            .handle(AddMediaCommand {
                session_id: SessionId::new().to_string(),
                media: MediaSegment {
                    duration: Some(0),
                    ..segment()
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MissingParameter);
        assert_eq!(err.field(), Some("duration"));
        assert_eq!(store.media_count().await, 0);
    }

    #[tokio::test]
    async fn session_id_is_checked_first() {
        let err = AddMediaHandler::new(Arc::new(InMemoryStore::new()))
            .handle(AddMediaCommand {
                session_id: String::new(),
                media: MediaSegment::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.field(), Some("sessionId"));
    }
}
