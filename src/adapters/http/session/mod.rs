//! HTTP adapter for session endpoints.

mod handlers;
mod routes;

pub use routes::session_routes;
