//! Recording Sessions - coordination service for multi-source recordings.
//!
//! Sessions gather capture sources (one per type), move through their
//! recording lifecycle, accept uploaded media segments and hand completed
//! work to transcoding workers through a job queue. Subscribers follow a
//! session's events over a WebSocket room.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
