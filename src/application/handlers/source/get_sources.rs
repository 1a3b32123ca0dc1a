//! GetSourcesHandler - Query handler for the sources of a session.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::source::SourceMap;
use crate::ports::SourceRepository;

/// Handler returning a session's sources keyed by type.
pub struct GetSourcesHandler {
    repository: Arc<dyn SourceRepository>,
}

impl GetSourcesHandler {
    pub fn new(repository: Arc<dyn SourceRepository>) -> Self {
        Self { repository }
    }

    /// Types without a registered source are absent from the map.
    pub async fn handle(&self, session_id: &SessionId) -> Result<SourceMap, DomainError> {
        let sources = self
            .repository
            .find_by_session(session_id)
            .await
            .map_err(|e| e.masked("Could not get this session."))?;
        Ok(SourceMap::from_sources(sources))
    }
}
