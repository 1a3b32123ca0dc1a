//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status, errors)
//! - `session` - Session aggregate, layout, join codes and events
//! - `source` - Capture sources and the per-type source projection
//! - `media` - Uploaded media segments and their validation
//! - `job` - Transcoding jobs

pub mod foundation;
pub mod job;
pub mod media;
pub mod session;
pub mod source;
