//! Chat relay: validate, persist, fan out.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use hotbeans_core::error::ErrorKind;
use hotbeans_core::result::AppResult;
use hotbeans_service::ChatService;

use crate::connection::{ConnectionHandle, ConnectionId, ConnectionRegistry, OutboundFrame};
use crate::message::{OutboundMessage, parse_chat_payload};
use crate::metrics::RelayMetrics;

/// Rebroadcasts every accepted chat frame to all connected clients.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    registry: Arc<ConnectionRegistry>,
    chat: ChatService,
    metrics: Arc<RelayMetrics>,
}

impl ChatRelay {
    /// Creates a relay over an owned registry.
    pub fn new(registry: Arc<ConnectionRegistry>, chat: ChatService) -> Self {
        Self {
            registry,
            chat,
            metrics: Arc::new(RelayMetrics::new()),
        }
    }

    /// The registry of connected clients.
    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        &self.registry
    }

    /// Relay counters.
    pub fn metrics(&self) -> &RelayMetrics {
        &self.metrics
    }

    /// Registers a new client.
    pub fn connect(&self) -> (Arc<ConnectionHandle>, mpsc::UnboundedReceiver<OutboundFrame>) {
        let (handle, rx) = self.registry.register();
        self.metrics.connection_opened();

        info!(
            conn_id = %handle.id,
            active = self.registry.len(),
            "Chat connection registered"
        );
        (handle, rx)
    }

    /// Removes a client.
    pub fn disconnect(&self, conn_id: &ConnectionId) {
        if let Some(handle) = self.registry.unregister(conn_id) {
            handle.close();
            self.metrics.connection_closed();

            let connected_secs = (chrono::Utc::now() - handle.connected_at).num_seconds();
            info!(
                conn_id = %conn_id,
                active = self.registry.len(),
                connected_secs,
                "Chat connection unregistered"
            );
        }
    }

    /// Processes one inbound text frame.
    ///
    /// A malformed frame is answered with an error frame to the sender only
    /// and returns `Ok`. A store failure is returned as `Err`; the caller
    /// should then close the connection.
    pub async fn handle_inbound(&self, conn_id: &ConnectionId, raw: &str) -> AppResult<()> {
        let payload = match parse_chat_payload(raw) {
            Ok(payload) => payload,
            Err(err) => {
                self.reject(conn_id, &err.message);
                return Ok(());
            }
        };

        match self.chat.post(payload).await {
            Ok(message) => {
                let recipients = self.broadcast(raw);
                self.metrics.message_relayed(recipients);
                debug!(
                    conn_id = %conn_id,
                    message_id = %message.id,
                    recipients,
                    "Chat message relayed"
                );
                Ok(())
            }
            Err(err) if err.kind == ErrorKind::Validation => {
                self.reject(conn_id, &err.message);
                Ok(())
            }
            Err(err) => {
                warn!(conn_id = %conn_id, error = %err, "Failed to persist chat message");
                Err(err)
            }
        }
    }

    /// Queue `text` for every connected client. Returns the number queued.
    ///
    /// Works on a snapshot of the registry; clients found dead are removed.
    pub fn broadcast(&self, text: &str) -> usize {
        let mut delivered = 0;
        for handle in self.registry.snapshot() {
            if handle.send(text.to_owned()) {
                delivered += 1;
            } else {
                self.disconnect(&handle.id);
            }
        }
        delivered
    }

    /// Close every connection, for server shutdown.
    pub fn shutdown(&self) -> usize {
        let closed = self.registry.close_all();
        for _ in 0..closed {
            self.metrics.connection_closed();
        }
        info!(closed, "Chat relay shut down");
        closed
    }

    fn reject(&self, conn_id: &ConnectionId, reason: &str) {
        self.metrics.message_rejected();
        debug!(conn_id = %conn_id, reason, "Rejected inbound chat frame");

        if let Some(handle) = self.registry.get(conn_id) {
            handle.send(OutboundMessage::invalid_message(reason).to_text());
        }
    }
}
