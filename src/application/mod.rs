//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! [`Services`] wires every handler once from the process-wide adapters.

pub mod handlers;
mod services;

pub use handlers::*;
pub use services::Services;
