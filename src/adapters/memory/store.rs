//! In-Memory Store Adapter
//!
//! Implements all four repository ports over process-local maps.
//! Used by tests and by `storage.backend = "memory"`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, JobId, SessionId};
use crate::domain::job::{Job, JobUpdate};
use crate::domain::media::Media;
use crate::domain::session::{JoinCode, Session, SessionUpdate};
use crate::domain::source::Source;
use crate::ports::{
    JobRepository, MediaRepository, SaveResult, SessionRepository, SourceRepository,
};

/// In-memory storage for sessions, sources, media and jobs.
///
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    sources: Arc<RwLock<Vec<Source>>>,
    media: Arc<RwLock<Vec<Media>>>,
    jobs: Arc<RwLock<HashMap<JobId, Job>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Number of stored sources across all sessions
    pub async fn source_count(&self) -> usize {
        self.sources.read().await.len()
    }

    /// Number of stored media segments across all sessions
    pub async fn media_count(&self) -> usize {
        self.media.read().await.len()
    }

    /// Number of stored jobs
    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.id()) {
            return Err(DomainError::storage_failure(format!(
                "Duplicate session id: {}",
                session.id()
            )));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn find_by_code(&self, code: &JoinCode) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .values()
            .filter(|s| s.code() == code)
            .min_by_key(|s| *s.created_at())
            .cloned())
    }

    async fn update(
        &self,
        id: &SessionId,
        update: &SessionUpdate,
    ) -> Result<Option<Session>, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.get_mut(id).map(|session| {
            session.apply(update);
            session.clone()
        }))
    }
}

#[async_trait]
impl SourceRepository for InMemoryStore {
    async fn insert(&self, source: &Source) -> Result<SaveResult, DomainError> {
        // Check and insert under one write lock, like a UNIQUE constraint.
        let mut sources = self.sources.write().await;
        let taken = sources.iter().any(|existing| {
            existing.id() == source.id()
                || (existing.session_id() == source.session_id()
                    && existing.source_type() == source.source_type())
        });
        if taken {
            return Ok(SaveResult::AlreadyExists);
        }
        sources.push(source.clone());
        Ok(SaveResult::Inserted)
    }

    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Source>, DomainError> {
        let sources = self.sources.read().await;
        Ok(sources
            .iter()
            .filter(|s| s.session_id() == session_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MediaRepository for InMemoryStore {
    async fn insert(&self, media: &Media) -> Result<(), DomainError> {
        let mut stored = self.media.write().await;
        if stored.iter().any(|m| m.id == media.id) {
            return Err(DomainError::storage_failure(format!(
                "Duplicate media id: {}",
                media.id
            )));
        }
        stored.push(media.clone());
        Ok(())
    }

    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Media>, DomainError> {
        let stored = self.media.read().await;
        Ok(stored
            .iter()
            .filter(|m| &m.session_id == session_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl JobRepository for InMemoryStore {
    async fn save(&self, job: &Job) -> Result<(), DomainError> {
        self.jobs.write().await.insert(*job.id(), job.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, DomainError> {
        Ok(self.jobs.read().await.get(id).cloned())
    }

    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Job>, DomainError> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .values()
            .filter(|j| j.session_id() == session_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: &JobId, update: &JobUpdate) -> Result<Option<Job>, DomainError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.get_mut(id).map(|job| {
            job.apply(update);
            job.clone()
        }))
    }
}
