//! SetRecordingHandler - Command handler for starting and stopping recording.
//!
//! Both actions load the session, broadcast the action to the session room
//! and then persist the new status. The broadcast happens before the write,
//! so participants hear about it before the caller gets a response.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::session::{Session, SessionEvent, SessionUpdate};
use crate::ports::SessionNotifier;

use super::{
    GetSessionHandler, GetSessionQuery, UpdateSessionCommand, UpdateSessionHandler,
};

/// Recording control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingAction {
    Start,
    Stop,
}

/// Command to start or stop recording a session.
#[derive(Debug, Clone)]
pub struct SetRecordingCommand {
    pub session_id: String,
    pub action: RecordingAction,
}

/// Handler for recording control.
pub struct SetRecordingHandler {
    sessions: Arc<GetSessionHandler>,
    updates: Arc<UpdateSessionHandler>,
    notifier: Arc<dyn SessionNotifier>,
}

impl SetRecordingHandler {
    pub fn new(
        sessions: Arc<GetSessionHandler>,
        updates: Arc<UpdateSessionHandler>,
        notifier: Arc<dyn SessionNotifier>,
    ) -> Self {
        Self {
            sessions,
            updates,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: SetRecordingCommand) -> Result<Session, DomainError> {
        // 1. Load (NotFound if absent)
        let mut view = self
            .sessions
            .handle(GetSessionQuery::ById(cmd.session_id.clone()))
            .await?;
        let session_id = *view.session.id();

        // 2. Both actions leave the session in Recording
        view.session.mark_recording();
        let status = view.session.status();
        let event = match cmd.action {
            RecordingAction::Start => SessionEvent::RecordingStarted { status },
            RecordingAction::Stop => SessionEvent::RecordingStopped { status },
        };

        // 3. Broadcast, then persist
        self.notifier.publish(&session_id, event).await;

        let session = self
            .updates
            .handle(UpdateSessionCommand {
                session_id: cmd.session_id,
                update: SessionUpdate::status(status),
            })
            .await?;

        tracing::info!(
            session_id = %session_id,
            action = ?cmd.action,
            "Recording state changed"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::source::GetSourcesHandler;
    use crate::application::handlers::test_support::MockNotifier;
    use crate::domain::foundation::{ErrorCode, SessionId, SessionStatus};
    use crate::domain::session::{JoinCode, START_RECORDING, STOP_RECORDING};
    use crate::ports::SessionRepository;

    async fn setup() -> (SetRecordingHandler, Arc<MockNotifier>, Session) {
        let store = Arc::new(InMemoryStore::new());
        let session = Session::new(SessionId::new(), JoinCode::from_string("MPQRTV"));
        SessionRepository::save(&*store, &session).await.unwrap();

        let notifier = Arc::new(MockNotifier::new());
        let handler = SetRecordingHandler::new(
            Arc::new(GetSessionHandler::new(
                store.clone(),
                Arc::new(GetSourcesHandler::new(store.clone())),
            )),
            Arc::new(UpdateSessionHandler::new(store)),
            notifier.clone(),
        );
        (handler, notifier, session)
    }

    #[tokio::test]
    async fn start_sets_recording_and_broadcasts() {
        let (handler, notifier, session) = setup().await;

        let updated = handler
            .handle(SetRecordingCommand {
                session_id: session.id().to_string(),
                action: RecordingAction::Start,
            })
            .await
            .unwrap();

        assert_eq!(updated.status(), SessionStatus::Recording);
        let events = notifier.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, *session.id());
        assert_eq!(events[0].1.name(), START_RECORDING);
    }

    #[tokio::test]
    async fn stop_broadcasts_stop_and_keeps_recording_status() {
        let (handler, notifier, session) = setup().await;

        let updated = handler
            .handle(SetRecordingCommand {
                session_id: session.id().to_string(),
                action: RecordingAction::Stop,
            })
            .await
            .unwrap();

        assert_eq!(updated.status(), SessionStatus::Recording);
        assert_eq!(notifier.names(), vec![STOP_RECORDING]);
    }

    #[tokio::test]
    async fn missing_session_is_not_found_and_silent() {
        let (handler, notifier, _session) = setup().await;

        let err = handler
            .handle(SetRecordingCommand {
                session_id: SessionId::new().to_string(),
                action: RecordingAction::Start,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(notifier.events().is_empty());
    }
}
