//! SessionStatus enum for tracking the lifecycle of recording sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a recording session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Ready,
    Loading,
    Recording,
    Stopped,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "Idle",
            SessionStatus::Ready => "Ready",
            SessionStatus::Loading => "Loading",
            SessionStatus::Recording => "Recording",
            SessionStatus::Stopped => "Stopped",
        }
    }

    /// Returns true while capture is in progress.
    pub fn is_recording(&self) -> bool {
        matches!(self, SessionStatus::Recording)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Idle" => Ok(SessionStatus::Idle),
            "Ready" => Ok(SessionStatus::Ready),
            "Loading" => Ok(SessionStatus::Loading),
            "Recording" => Ok(SessionStatus::Recording),
            "Stopped" => Ok(SessionStatus::Stopped),
            other => Err(format!("unknown session status: {}", other)),
        }
    }
}
