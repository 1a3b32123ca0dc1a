//! In-memory adapters - storage and queue without external services.
//!
//! - `InMemoryStore` - All four repository ports
//! - `InMemoryJobQueue` - Job queue that records enqueued ids

mod job_queue;
mod store;

pub use job_queue::InMemoryJobQueue;
pub use store::InMemoryStore;
