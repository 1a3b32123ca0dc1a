//! WebSocket upgrade handler for session update subscriptions.
//!
//! Connection lifecycle:
//! 1. Upgrade to WebSocket and send `connected`
//! 2. Client sends `subscribe_to_updates` with a session id
//! 3. Server joins the session room, acks with `subscribed` and forwards
//!    every room event until the client re-subscribes or disconnects. An id
//!    no session can have is acked too; that subscription stays silent.
//! 4. Room membership is cleaned up on disconnect

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use crate::domain::foundation::{DomainError, SessionId};

use super::{
    messages::{ClientMessage, RoomEvent, ServerMessage},
    rooms::{ClientId, RoomManager},
};

/// Outbound messages buffered per connection before the reader backs off.
const OUTBOUND_BUFFER: usize = 64;

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    pub room_manager: Arc<RoomManager>,
}

impl WebSocketState {
    pub fn new(room_manager: Arc<RoomManager>) -> Self {
        Self { room_manager }
    }
}

/// Handle WebSocket upgrade requests.
///
/// Route: `GET /ws`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<WebSocketState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Runs for the lifetime of one connection.
async fn handle_socket(socket: WebSocket, state: WebSocketState) {
    let (sink, mut stream) = socket.split();
    let client_id = ClientId::new();

    let (out_tx, out_rx) = mpsc::channel(OUTBOUND_BUFFER);
    let mut writer = tokio::spawn(write_messages(sink, out_rx));

    if out_tx.send(ServerMessage::connected(&client_id)).await.is_err() {
        return;
    }
    tracing::debug!(client_id = %client_id, "WebSocket client connected");

    let mut forwarder: Option<JoinHandle<()>> = None;

    loop {
        tokio::select! {
            _ = &mut writer => break,
            frame = stream.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    handle_client_message(&text, &client_id, &state, &out_tx, &mut forwarder)
                        .await;
                }
                Some(Ok(Message::Binary(_))) => {
                    tracing::warn!(client_id = %client_id, "Received unsupported binary message");
                }
                Some(Ok(Message::Close(_))) | None => break,
                // Protocol ping/pong is answered by axum
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::debug!(client_id = %client_id, "Receive error: {}", e);
                    break;
                }
            }
        }
    }

    if let Some(task) = forwarder.take() {
        task.abort();
        let _ = task.await;
    }
    state.room_manager.leave(&client_id).await;
    writer.abort();
    tracing::debug!(client_id = %client_id, "WebSocket client disconnected");
}

/// Process one text frame from the client.
///
/// Protocol errors are reported back as `error` messages; they never close
/// the connection.
async fn handle_client_message(
    text: &str,
    client_id: &ClientId,
    state: &WebSocketState,
    out_tx: &mpsc::Sender<ServerMessage>,
    forwarder: &mut Option<JoinHandle<()>>,
) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            let _ = out_tx
                .send(ServerMessage::error("INVALID_MESSAGE", e.to_string()))
                .await;
            return;
        }
    };

    match message {
        ClientMessage::Ping => {
            let _ = out_tx.send(ServerMessage::pong()).await;
        }
        ClientMessage::SubscribeToUpdates { session_id: raw } => {
            let raw = raw.trim();
            if raw.is_empty() {
                let e = DomainError::missing_parameter("sessionId");
                let _ = out_tx
                    .send(ServerMessage::error(&e.code.to_string(), e.message))
                    .await;
                return;
            }

            if let Some(previous) = forwarder.take() {
                previous.abort();
                let _ = previous.await;
            }

            let Ok(session_id) = raw.parse::<SessionId>() else {
                // Nothing is ever published for an id that is not a UUID
                state.room_manager.leave(client_id).await;
                let _ = out_tx.send(ServerMessage::subscribed(raw)).await;
                tracing::debug!(client_id = %client_id, session_id = %raw, "Subscribed to unknown session");
                return;
            };

            let room_rx = state
                .room_manager
                .join(&session_id, client_id.clone())
                .await;
            let _ = out_tx.send(ServerMessage::subscribed(&session_id)).await;
            tracing::debug!(client_id = %client_id, session_id = %session_id, "Subscribed to session");

            *forwarder = Some(tokio::spawn(forward_room_events(
                room_rx,
                out_tx.clone(),
                client_id.clone(),
            )));
        }
    }
}

/// Copy room events into the connection's outbound queue.
async fn forward_room_events(
    mut room_rx: broadcast::Receiver<RoomEvent>,
    out_tx: mpsc::Sender<ServerMessage>,
    client_id: ClientId,
) {
    loop {
        match room_rx.recv().await {
            Ok(event) => {
                if out_tx.send(event.to_server_message()).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                tracing::debug!(client_id = %client_id, missed, "Client lagging, events dropped");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Serialize outbound messages onto the socket until either side closes.
async fn write_messages(
    mut sink: SplitSink<WebSocket, Message>,
    mut out_rx: mpsc::Receiver<ServerMessage>,
) {
    while let Some(message) = out_rx.recv().await {
        let json = match serde_json::to_string(&message) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize server message: {}", e);
                continue;
            }
        };
        if sink.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

/// Create axum router for the WebSocket endpoint.
pub fn websocket_router() -> Router<WebSocketState> {
    Router::new().route("/ws", get(ws_handler))
}
