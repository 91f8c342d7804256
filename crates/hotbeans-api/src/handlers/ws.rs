//! Chat WebSocket handler.

use std::time::Duration;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{info, warn};

use hotbeans_realtime::OutboundFrame;

use crate::state::AppState;

/// How long the writer gets to flush queued frames after the reader ends.
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// GET /ws/chat
pub async fn ws_chat(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_chat_connection(state, socket))
}

/// Drives one chat client until it disconnects or the server closes it.
async fn handle_chat_connection(state: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (handle, mut outbound_rx) = state.relay.connect();
    let conn_id = handle.id;

    let mut writer = tokio::spawn(async move {
        while let Some(frame) = outbound_rx.recv().await {
            match frame {
                OutboundFrame::Text(text) => {
                    if ws_tx.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                OutboundFrame::Close => {
                    let _ = ws_tx.send(Message::Close(None)).await;
                    break;
                }
            }
        }
    });

    loop {
        let next = tokio::select! {
            next = ws_rx.next() => next,
            () = handle.closed() => break,
        };

        match next {
            Some(Ok(Message::Text(text))) => {
                if let Err(e) = state.relay.handle_inbound(&conn_id, text.as_str()).await {
                    warn!(conn_id = %conn_id, error = %e, "Closing chat connection after store failure");
                    break;
                }
            }
            Some(Ok(Message::Close(_))) | None => break,
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                warn!(conn_id = %conn_id, error = %e, "WebSocket error");
                break;
            }
        }
    }

    state.relay.disconnect(&conn_id);
    if tokio::time::timeout(WRITER_DRAIN_TIMEOUT, &mut writer)
        .await
        .is_err()
    {
        writer.abort();
    }

    info!(conn_id = %conn_id, "Chat connection closed");
}
