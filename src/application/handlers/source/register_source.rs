//! RegisterSourceHandler - Command handler for adding a capture source to a session.
//!
//! A session holds at most one source per type. The pre-insert read gives a
//! fast, friendly conflict; the store's uniqueness constraint settles races
//! between concurrent registrations.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::SessionEvent;
use crate::domain::source::{Source, SourceDraft, SourceMap, SourceType};
use crate::ports::{SaveResult, SessionNotifier, SourceRepository};

/// Command to register a source.
#[derive(Debug, Clone)]
pub struct RegisterSourceCommand {
    pub session_id: String,
    pub source: SourceDraft,
}

/// Handler for registering sources.
pub struct RegisterSourceHandler {
    repository: Arc<dyn SourceRepository>,
    notifier: Arc<dyn SessionNotifier>,
}

impl RegisterSourceHandler {
    pub fn new(repository: Arc<dyn SourceRepository>, notifier: Arc<dyn SessionNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: RegisterSourceCommand) -> Result<Source, DomainError> {
        // 1. Validate in order: sessionId, id, type, name
        let session_id = SessionId::require(&cmd.session_id)?;
        let source_ref = cmd.source.validate()?;
        let source_type = source_ref.source_type;

        // 2. Reject a second source of the same type
        let existing = self
            .repository
            .find_by_session(&session_id)
            .await
            .map_err(|e| e.masked("Could not get this session."))?;
        if SourceMap::from_sources(existing).contains(source_type) {
            return Err(already_registered(&session_id, source_type));
        }

        // 3. Persist; the store has the final word on uniqueness
        let source = Source::new(session_id, source_ref);
        let saved = self
            .repository
            .insert(&source)
            .await
            .map_err(|e| e.masked("Could not create this source."))?;
        if saved == SaveResult::AlreadyExists {
            tracing::warn!(
                session_id = %session_id,
                source_type = %source_type,
                source_id = %source.id(),
                "Source insert rejected by uniqueness constraint"
            );
            return Err(already_registered(&session_id, source_type));
        }

        // 4. Announce to the session room
        self.notifier
            .publish(&session_id, SessionEvent::SourceAdded(source.clone()))
            .await;

        tracing::info!(
            session_id = %session_id,
            source_type = %source_type,
            source_id = %source.id(),
            "Source registered"
        );
        Ok(source)
    }
}

fn already_registered(session_id: &SessionId, source_type: SourceType) -> DomainError {
    DomainError::conflict(format!(
        "A {} source is already registered for session {}",
        source_type, session_id
    ))
    .with_detail("type", source_type.as_str())
}
