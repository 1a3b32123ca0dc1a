//! Source repository port.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::source::Source;
use async_trait::async_trait;

/// Outcome of inserting a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// Source was inserted.
    Inserted,
    /// A source with the same id, or of the same type in the same session,
    /// already exists. Nothing was written.
    AlreadyExists,
}

/// Repository port for capture sources.
///
/// Implementations must enforce uniqueness of `(session_id, type)` atomically
/// (e.g. a UNIQUE constraint), so that two concurrent registrations of the
/// same type cannot both be inserted.
#[async_trait]
pub trait SourceRepository: Send + Sync {
    /// Insert a source unless it would violate uniqueness.
    async fn insert(&self, source: &Source) -> Result<SaveResult, DomainError>;

    /// All sources of a session, oldest first.
    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Source>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SourceRepository) {}
    }
}
