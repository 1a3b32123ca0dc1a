//! WebSocket adapters for real-time session updates.
//!
//! Participants subscribe to a session and receive every event the core
//! publishes for it.
//!
//! ```text
//!  SessionLifecycle / SourceRegistry / JobDispatcher
//!                       │
//!                       │ SessionNotifier::publish
//!                       ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      RoomManager                                     │
//! │   Room: session-123    Room: session-456    Room: session-789       │
//! │   ├── client-a         ├── client-d         ├── client-g            │
//! │   └── client-b         └── client-e         └── client-h            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`messages`] - WebSocket message protocol types
//! - [`rooms`] - Room management and the `SessionNotifier` implementation
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod handler;
pub mod messages;
pub mod rooms;

pub use handler::{websocket_router, ws_handler, WebSocketState};
pub use messages::{ClientMessage, RoomEvent, ServerMessage};
pub use rooms::{ClientId, RoomManager};
