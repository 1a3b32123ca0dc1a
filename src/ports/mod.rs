//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `SessionRepository` - Session records
//! - `SourceRepository` - Capture sources, unique per (session, type)
//! - `MediaRepository` - Uploaded media segments
//! - `JobRepository` - Transcoding jobs
//!
//! ## Collaborator Ports
//!
//! - `SessionNotifier` - Room-scoped broadcast of session events
//! - `JobQueue` - External work queue for transcoding workers

mod job_queue;
mod job_repository;
mod media_repository;
mod session_notifier;
mod session_repository;
mod source_repository;

pub use job_queue::JobQueue;
pub use job_repository::JobRepository;
pub use media_repository::MediaRepository;
pub use session_notifier::SessionNotifier;
pub use session_repository::SessionRepository;
pub use source_repository::{SaveResult, SourceRepository};
