//! Recording layout value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Corner occupied by the picture-in-picture camera overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PipPosition {
    #[default]
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

/// How the captured sources are composed into the final recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RecordingMode {
    #[default]
    PiP,
    Facecam,
    Screen,
}

impl RecordingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordingMode::PiP => "PiP",
            RecordingMode::Facecam => "Facecam",
            RecordingMode::Screen => "Screen",
        }
    }
}

impl fmt::Display for RecordingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PiP" => Ok(RecordingMode::PiP),
            "Facecam" => Ok(RecordingMode::Facecam),
            "Screen" => Ok(RecordingMode::Screen),
            other => Err(format!("unknown recording mode: {}", other)),
        }
    }
}

/// Layout of a session's composed recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub pip_position: PipPosition,
    pub recording_mode: RecordingMode,
}
