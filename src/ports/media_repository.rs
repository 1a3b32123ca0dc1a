//! Media repository port.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::media::Media;
use async_trait::async_trait;

/// Repository port for uploaded media segments.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Insert a media segment.
    ///
    /// # Errors
    ///
    /// - `StorageFailure` if the store rejects the row (including a duplicate id)
    async fn insert(&self, media: &Media) -> Result<(), DomainError>;

    /// All media of a session, oldest first.
    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Media>, DomainError>;
}
