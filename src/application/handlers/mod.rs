//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations:
//! - `session` - Session lifecycle (create, look up, update, recording control)
//! - `source` - Source registration, one per type per session
//! - `media` - Media intake, single and batch
//! - `job` - Job dispatch and worker status updates

pub mod job;
pub mod media;
pub mod session;
pub mod source;

#[cfg(test)]
pub(crate) mod test_support;

pub use job::{
    AddJobCommand, AddJobHandler, GetJobHandler, GetSessionJobsHandler, UpdateJobCommand,
    UpdateJobHandler,
};
pub use media::{
    AddAllMediaCommand, AddAllMediaHandler, AddMediaCommand, AddMediaHandler,
    GetSessionMediaHandler, IntakeFailure, IntakeReport,
};
pub use session::{
    CreateSessionHandler, GetSessionHandler, GetSessionQuery, RecordingAction,
    SessionView, SetRecordingCommand, SetRecordingHandler, UpdateSessionCommand,
    UpdateSessionHandler,
};
pub use source::{GetSourcesHandler, RegisterSourceCommand, RegisterSourceHandler};
