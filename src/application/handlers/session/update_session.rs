//! UpdateSessionHandler - Command handler for partial session updates.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{Session, SessionUpdate};
use crate::ports::SessionRepository;

/// Command to update a session's layout and/or status.
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub session_id: String,
    pub update: SessionUpdate,
}

/// Handler for partial session updates.
pub struct UpdateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl UpdateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Applies the update and returns the stored session.
    ///
    /// No status transition is rejected.
    pub async fn handle(&self, cmd: UpdateSessionCommand) -> Result<Session, DomainError> {
        let id = SessionId::require_field(&cmd.session_id, "id")?;

        let session = self
            .repository
            .update(&id, &cmd.update)
            .await
            .map_err(|e| e.masked("Could not get this session."))?
            .ok_or_else(|| DomainError::not_found("Session", id))?;

        tracing::info!(
            session_id = %id,
            status = %session.status(),
            "Session updated"
        );
        Ok(session)
    }
}
