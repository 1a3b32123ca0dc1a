//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum REST API and router assembly
//! - `websocket` - session rooms and the `/ws` endpoint
//! - `postgres` - sqlx repositories
//! - `memory` - in-process store and queue for tests and local runs
//! - `redis` - Redis list job queue

pub mod http;
pub mod memory;
pub mod postgres;
pub mod redis;
pub mod websocket;
