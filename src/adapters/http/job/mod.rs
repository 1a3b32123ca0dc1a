//! HTTP adapter for job endpoints.

mod handlers;
mod routes;

pub use routes::job_routes;
