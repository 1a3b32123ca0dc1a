//! Session-scoped notifications.
//!
//! Events fanned out to every participant watching a session:
//! - `SOURCE_ADD` - A capture source was registered
//! - `START_RECORDING` - Recording was started
//! - `STOP_RECORDING` - Recording was stopped
//! - `jobCreated` - A transcoding job was dispatched

use serde_json::{json, Value};

use crate::domain::foundation::{JobId, SessionStatus};
use crate::domain::source::Source;

pub const SOURCE_ADD: &str = "SOURCE_ADD";
pub const START_RECORDING: &str = "START_RECORDING";
pub const STOP_RECORDING: &str = "STOP_RECORDING";
pub const JOB_CREATED: &str = "jobCreated";

/// A state change observed by all participants of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SourceAdded(Source),
    RecordingStarted { status: SessionStatus },
    RecordingStopped { status: SessionStatus },
    JobCreated { id: JobId },
}

impl SessionEvent {
    /// Event name as seen by subscribers.
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::SourceAdded(_) => SOURCE_ADD,
            SessionEvent::RecordingStarted { .. } => START_RECORDING,
            SessionEvent::RecordingStopped { .. } => STOP_RECORDING,
            SessionEvent::JobCreated { .. } => JOB_CREATED,
        }
    }

    /// JSON payload delivered with the event.
    pub fn payload(&self) -> Value {
        match self {
            SessionEvent::SourceAdded(source) => {
                serde_json::to_value(source).unwrap_or(Value::Null)
            }
            SessionEvent::RecordingStarted { status }
            | SessionEvent::RecordingStopped { status } => json!({ "status": status }),
            SessionEvent::JobCreated { id } => json!({ "id": id }),
        }
    }
}
