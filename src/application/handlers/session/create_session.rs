//! CreateSessionHandler - Command handler for opening a new recording session.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{JoinCode, Session};
use crate::domain::source::SourceMap;
use crate::ports::SessionRepository;

use super::SessionView;

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Creates an idle session with a fresh id, a random join code and the
    /// default layout.
    pub async fn handle(&self) -> Result<SessionView, DomainError> {
        let session = Session::new(SessionId::new(), JoinCode::generate());

        self.repository
            .save(&session)
            .await
            .map_err(|e| e.masked("Could not create this session."))?;

        tracing::info!(
            session_id = %session.id(),
            code = %session.code(),
            "Session created"
        );

        Ok(SessionView {
            session,
            sources: SourceMap::default(),
        })
    }
}
