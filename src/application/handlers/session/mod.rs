//! Session command and query handlers.

mod create_session;
mod get_session;
mod set_recording;
mod update_session;

pub use create_session::CreateSessionHandler;
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use set_recording::{RecordingAction, SetRecordingCommand, SetRecordingHandler};
pub use update_session::{UpdateSessionCommand, UpdateSessionHandler};

use serde::Serialize;

use crate::domain::session::Session;
use crate::domain::source::SourceMap;

/// A session together with its registered sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub session: Session,
    pub sources: SourceMap,
}
