//! Source domain module.
//!
//! A source is one capture input (camera, microphone or screen) registered
//! against a session. A session holds at most one source of each type.

mod entity;
mod source_map;

pub use entity::{Source, SourceDraft, SourceRef, SourceType};
pub use source_map::SourceMap;
