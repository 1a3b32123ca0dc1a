//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the recording domain.

mod errors;
mod ids;
mod session_status;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{JobId, MediaId, SessionId, SourceId};
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;
