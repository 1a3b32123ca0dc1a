//! GetSessionHandler - Query handler for a session and its sources.

use std::sync::Arc;

use crate::application::handlers::source::GetSourcesHandler;
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::JoinCode;
use crate::ports::SessionRepository;

use super::SessionView;

/// Query to look a session up.
#[derive(Debug, Clone)]
pub enum GetSessionQuery {
    /// By session id.
    ById(String),
    /// By join code.
    ByCode(String),
}

/// Handler for retrieving sessions with their source map.
pub struct GetSessionHandler {
    repository: Arc<dyn SessionRepository>,
    sources: Arc<GetSourcesHandler>,
}

impl GetSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>, sources: Arc<GetSourcesHandler>) -> Self {
        Self {
            repository,
            sources,
        }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionView, DomainError> {
        let session = match &query {
            GetSessionQuery::ById(raw) => {
                let id = SessionId::require_field(raw, "id")?;
                self.repository
                    .find_by_id(&id)
                    .await
                    .map_err(|e| e.masked("Could not get this session."))?
                    .ok_or_else(|| DomainError::not_found("Session", id))?
            }
            GetSessionQuery::ByCode(raw) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(DomainError::missing_parameter("code"));
                }
                self.repository
                    .find_by_code(&JoinCode::from_string(raw.to_ascii_uppercase()))
                    .await
                    .map_err(|e| e.masked("Could not get this session."))?
                    .ok_or_else(|| DomainError::not_found("Session", raw))?
            }
        };

        let sources = self.sources.handle(session.id()).await?;
        Ok(SessionView { session, sources })
    }
}
