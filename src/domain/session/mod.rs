//! Session domain module.
//!
//! Handles recording session state: join codes, lifecycle status, layout,
//! and the events broadcast to session participants.

mod aggregate;
mod events;
mod join_code;
mod layout;

pub use aggregate::{Session, SessionUpdate};
pub use events::{SessionEvent, JOB_CREATED, SOURCE_ADD, START_RECORDING, STOP_RECORDING};
pub use join_code::{JoinCode, JOIN_CODE_ALPHABET, JOIN_CODE_LENGTH};
pub use layout::{Layout, PipPosition, RecordingMode};
