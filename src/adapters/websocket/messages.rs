//! WebSocket message types for session update subscriptions.
//!
//! Defines the protocol between server and connected clients:
//! - Server → Client: Connection status, subscription acks, room events, errors, pongs
//! - Client → Server: Subscriptions, pings

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::session::SessionEvent;

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established.
    Connected(ConnectedMessage),

    /// Client joined a session room.
    Subscribed(SubscribedMessage),

    /// Event broadcast to the session room.
    Event(EventMessage),

    /// Error occurred; the connection stays open.
    Error(ErrorMessage),

    /// Heartbeat response.
    Pong(PongMessage),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedMessage {
    pub client_id: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedMessage {
    pub session_id: String,
    pub timestamp: String,
}

/// Room event as delivered to subscribers.
#[derive(Debug, Clone, Serialize)]
pub struct EventMessage {
    pub event: String,
    pub data: serde_json::Value,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PongMessage {
    pub timestamp: String,
}

impl ServerMessage {
    pub fn connected(client_id: impl ToString) -> Self {
        ServerMessage::Connected(ConnectedMessage {
            client_id: client_id.to_string(),
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }

    pub fn subscribed(session_id: impl ToString) -> Self {
        ServerMessage::Subscribed(SubscribedMessage {
            session_id: session_id.to_string(),
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }

    pub fn error(code: &str, message: impl Into<String>) -> Self {
        ServerMessage::Error(ErrorMessage {
            code: code.to_string(),
            message: message.into(),
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }

    pub fn pong() -> Self {
        ServerMessage::Pong(PongMessage {
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }
}

// ============================================
// Client → Server Messages
// ============================================

/// All message types that can be received from client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Join the room of a session. Replaces any previous subscription.
    SubscribeToUpdates {
        #[serde(rename = "sessionId", default)]
        session_id: String,
    },

    /// Heartbeat request.
    Ping,
}

// ============================================
// Internal Types
// ============================================

/// Event as carried through a room's broadcast channel.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomEvent {
    pub name: &'static str,
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl RoomEvent {
    pub fn from_session_event(event: &SessionEvent) -> Self {
        Self {
            name: event.name(),
            data: event.payload(),
            timestamp: Timestamp::now(),
        }
    }

    /// Convert to a server message for sending to clients.
    pub fn to_server_message(self) -> ServerMessage {
        ServerMessage::Event(EventMessage {
            event: self.name.to_string(),
            data: self.data,
            timestamp: self.timestamp.to_rfc3339(),
        })
    }
}
