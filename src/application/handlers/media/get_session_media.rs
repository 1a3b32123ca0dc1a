//! GetSessionMediaHandler - Query handler for the segments stored for a session.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::media::Media;
use crate::ports::MediaRepository;

/// Handler for listing a session's stored media.
pub struct GetSessionMediaHandler {
    repository: Arc<dyn MediaRepository>,
}

impl GetSessionMediaHandler {
    pub fn new(repository: Arc<dyn MediaRepository>) -> Self {
        Self { repository }
    }

    /// Oldest first. Rejected segments never appear here.
    pub async fn handle(&self, session_id: &str) -> Result<Vec<Media>, DomainError> {
        let session_id = SessionId::require(session_id)?;
        self.repository
            .find_by_session(&session_id)
            .await
            .map_err(|e| e.masked("Could not get this media."))
    }
}
