//! Source command and query handlers.

mod get_sources;
mod register_source;

pub use get_sources::GetSourcesHandler;
pub use register_source::{RegisterSourceCommand, RegisterSourceHandler};
