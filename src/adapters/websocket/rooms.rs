//! WebSocket room management for session-based event routing.
//!
//! Rooms are keyed by session id. Every event published for a session is
//! delivered to all clients subscribed to that session's room.
//!
//! ```text
//! Room: session-123    Room: session-456
//! ├── client-a         ├── client-d
//! ├── client-b         └── client-e
//! └── client-c
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionEvent;
use crate::ports::SessionNotifier;

use super::messages::RoomEvent;

/// Unique identifier for a WebSocket client connection.
///
/// Generated server-side when a client connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Manages session rooms and fans events out to their members.
///
/// Rooms are created lazily on first join and dropped once nobody is left
/// listening. Joining a room for a session that does not exist is allowed.
///
/// # Thread Safety
///
/// Uses `RwLock` for the room registry since broadcasts (reads) vastly
/// outnumber joins/leaves (writes).
pub struct RoomManager {
    /// Map of session_id → broadcast sender for that room.
    rooms: RwLock<HashMap<SessionId, broadcast::Sender<RoomEvent>>>,

    /// Map of client_id → session_id for cleanup on disconnect.
    client_sessions: RwLock<HashMap<ClientId, SessionId>>,

    /// Channel capacity for each room's broadcast channel.
    channel_capacity: usize,
}

impl RoomManager {
    /// Create a room manager whose rooms buffer `channel_capacity` events.
    ///
    /// Receivers that fall further behind lose the oldest events.
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            client_sessions: RwLock::new(HashMap::new()),
            channel_capacity: channel_capacity.max(1),
        }
    }

    /// Create with default capacity (128 events).
    pub fn with_default_capacity() -> Self {
        Self::new(128)
    }

    /// Join a client to a session room, leaving any room it was in before.
    ///
    /// Returns a receiver for every event published to the room from now on.
    /// The caller must drop the receiver of the previous room.
    pub async fn join(
        &self,
        session_id: &SessionId,
        client_id: ClientId,
    ) -> broadcast::Receiver<RoomEvent> {
        let previous = self
            .client_sessions
            .write()
            .await
            .insert(client_id, *session_id);

        let mut rooms = self.rooms.write().await;
        let receiver = rooms
            .entry(*session_id)
            .or_insert_with(|| broadcast::channel(self.channel_capacity).0)
            .subscribe();

        if let Some(previous) = previous.filter(|p| p != session_id) {
            prune_if_empty(&mut rooms, &previous);
        }

        receiver
    }

    /// Remove a client from its session room.
    ///
    /// The client's receiver must already be dropped for the room to be
    /// cleaned up when it was the last member.
    pub async fn leave(&self, client_id: &ClientId) {
        let session_id = self.client_sessions.write().await.remove(client_id);

        if let Some(session_id) = session_id {
            prune_if_empty(&mut *self.rooms.write().await, &session_id);
        }
    }

    /// Broadcast an event to all clients in a session room.
    ///
    /// Never blocks and never fails: with no room or no receivers the event
    /// is dropped.
    pub async fn broadcast_to_session(&self, session_id: &SessionId, event: RoomEvent) {
        let delivered = {
            let rooms = self.rooms.read().await;
            match rooms.get(session_id) {
                Some(sender) => sender.send(event).is_ok(),
                None => return,
            }
        };

        if !delivered {
            prune_if_empty(&mut *self.rooms.write().await, session_id);
        }
    }

    /// Number of live receivers in a room (0 if the room doesn't exist).
    pub async fn client_count(&self, session_id: &SessionId) -> usize {
        let rooms = self.rooms.read().await;
        rooms
            .get(session_id)
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }

    /// All active room ids.
    pub async fn active_rooms(&self) -> Vec<SessionId> {
        self.rooms.read().await.keys().cloned().collect()
    }

    /// Total count of subscribed clients across all rooms.
    pub async fn total_client_count(&self) -> usize {
        self.client_sessions.read().await.len()
    }
}

impl Default for RoomManager {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

fn prune_if_empty(
    rooms: &mut HashMap<SessionId, broadcast::Sender<RoomEvent>>,
    session_id: &SessionId,
) {
    if rooms
        .get(session_id)
        .is_some_and(|sender| sender.receiver_count() == 0)
    {
        rooms.remove(session_id);
    }
}

#[async_trait]
impl SessionNotifier for RoomManager {
    async fn publish(&self, session_id: &SessionId, event: SessionEvent) {
        tracing::debug!(session_id = %session_id, event = event.name(), "Publishing session event");
        self.broadcast_to_session(session_id, RoomEvent::from_session_event(&event))
            .await;
    }
}
