//! Shared mocks for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, JobId, SessionId};
use crate::domain::job::{Job, JobUpdate};
use crate::domain::media::Media;
use crate::domain::session::{JoinCode, Session, SessionEvent, SessionUpdate};
use crate::domain::source::Source;
use crate::ports::{
    JobRepository, MediaRepository, SaveResult, SessionNotifier, SessionRepository,
    SourceRepository,
};

/// Notifier that records every published event.
#[derive(Default)]
pub struct MockNotifier {
    events: Mutex<Vec<(SessionId, SessionEvent)>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(SessionId, SessionEvent)> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(|(_, e)| e.name()).collect()
    }
}

#[async_trait]
impl SessionNotifier for MockNotifier {
    async fn publish(&self, session_id: &SessionId, event: SessionEvent) {
        self.events.lock().unwrap().push((*session_id, event));
    }
}

fn simulated() -> DomainError {
    DomainError::storage_failure("Simulated database failure")
}

/// Repository whose every call fails with a storage error.
pub struct FailingStore;

#[async_trait]
impl SessionRepository for FailingStore {
    async fn save(&self, _session: &Session) -> Result<(), DomainError> {
        Err(simulated())
    }

    async fn find_by_id(&self, _id: &SessionId) -> Result<Option<Session>, DomainError> {
        Err(simulated())
    }

    async fn find_by_code(&self, _code: &JoinCode) -> Result<Option<Session>, DomainError> {
        Err(simulated())
    }

    async fn update(
        &self,
        _id: &SessionId,
        _update: &SessionUpdate,
    ) -> Result<Option<Session>, DomainError> {
        Err(simulated())
    }
}

#[async_trait]
impl SourceRepository for FailingStore {
    async fn insert(&self, _source: &Source) -> Result<SaveResult, DomainError> {
        Err(simulated())
    }

    async fn find_by_session(&self, _session_id: &SessionId) -> Result<Vec<Source>, DomainError> {
        Err(simulated())
    }
}

#[async_trait]
impl MediaRepository for FailingStore {
    async fn insert(&self, _media: &Media) -> Result<(), DomainError> {
        Err(simulated())
    }

    async fn find_by_session(&self, _session_id: &SessionId) -> Result<Vec<Media>, DomainError> {
        Err(simulated())
    }
}

#[async_trait]
impl JobRepository for FailingStore {
    async fn save(&self, _job: &Job) -> Result<(), DomainError> {
        Err(simulated())
    }

    async fn find_by_id(&self, _id: &JobId) -> Result<Option<Job>, DomainError> {
        Err(simulated())
    }

    async fn find_by_session(&self, _session_id: &SessionId) -> Result<Vec<Job>, DomainError> {
        Err(simulated())
    }

    async fn update(&self, _id: &JobId, _update: &JobUpdate) -> Result<Option<Job>, DomainError> {
        Err(simulated())
    }
}
