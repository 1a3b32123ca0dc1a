//! Redis adapters.
//!
//! - `RedisJobQueue` - Transcoding queue backed by Redis lists

mod job_queue;

pub use job_queue::RedisJobQueue;
