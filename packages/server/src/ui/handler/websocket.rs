//! WebSocket connection handlers.
//!
//! Each socket gets a fresh connection id. Inbound frames are parsed into
//! [`ClientEvent`]s and forwarded to the session actor; outbound frames come
//! from the actor through the connection's pusher channel.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId, infrastructure::dto::websocket::ClientEvent, ui::state::AppState,
    usecase::SessionHandle,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the connection's pusher channel into the socket.
///
/// # Arguments
///
/// * `rx` - Serialized frames queued by the message pusher
/// * `sender` - WebSocket sink of this connection
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Spawns a task that forwards inbound frames to the session actor.
fn receive_loop(
    mut receiver: SplitStream<WebSocket>,
    session: SessionHandle,
    connection_id: ConnectionId,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received from '{}': {}", connection_id, text.as_str());
                    let event = match serde_json::from_str::<ClientEvent>(text.as_str()) {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!("Ignoring malformed frame from '{}': {}", connection_id, e);
                            continue;
                        }
                    };
                    if session
                        .send(event.into_command(connection_id.clone()))
                        .is_err()
                    {
                        tracing::error!("Session actor is gone; closing '{}'", connection_id);
                        break;
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                // Ping/pong is handled by axum
                _ => {}
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (sender, receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel();

    if state.session.connect(connection_id.clone(), tx).is_err() {
        tracing::error!("Session actor is gone; rejecting '{}'", connection_id);
        return;
    }

    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = receive_loop(receiver, state.session.clone(), connection_id.clone());

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if state.session.disconnect(connection_id.clone()).is_err() {
        tracing::warn!("Session actor is gone; could not disconnect '{}'", connection_id);
    }
}
