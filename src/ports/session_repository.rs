//! Session repository port.
//!
//! Defines the contract for persisting and retrieving Session records.
//! Implementations handle the actual storage operations.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{JoinCode, Session, SessionUpdate};
use async_trait::async_trait;

/// Repository port for Session persistence.
///
/// Every operation is atomic for the record it touches; nothing here spans
/// more than one row.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `StorageFailure` on persistence failure
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Find a session by its join code.
    ///
    /// Codes are not guaranteed unique; the oldest match is returned.
    async fn find_by_code(&self, code: &JoinCode) -> Result<Option<Session>, DomainError>;

    /// Apply a partial update in place and return the updated record.
    ///
    /// Returns `None` if the session does not exist.
    async fn update(
        &self,
        id: &SessionId,
        update: &SessionUpdate,
    ) -> Result<Option<Session>, DomainError>;
}
