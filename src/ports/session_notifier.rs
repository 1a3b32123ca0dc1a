//! SessionNotifier port - fan-out of session events to participants.
//!
//! This port defines how the core announces state changes without knowing
//! about the underlying transport (WebSocket rooms, pub/sub, ...).

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionEvent;

/// Port for broadcasting events to everyone subscribed to a session.
///
/// Delivery is at-most-once and best-effort: no acknowledgement, retry or
/// persistence of missed events. Publishing never fails from the caller's
/// point of view and must not block on slow subscribers.
#[async_trait]
pub trait SessionNotifier: Send + Sync {
    /// Publish an event to the session's room.
    async fn publish(&self, session_id: &SessionId, event: SessionEvent);
}
