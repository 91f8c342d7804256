//! Individual WebSocket connection handle.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::{Notify, mpsc};
use uuid::Uuid;

/// Unique connection identifier
pub type ConnectionId = Uuid;

/// Frames queued for delivery to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundFrame {
    /// A text frame.
    Text(String),
    /// Close the socket after flushing earlier frames.
    Close,
}

/// A handle to a single WebSocket connection.
///
/// The outbound queue is unbounded: a slow reader grows its own queue
/// instead of losing broadcasts.
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Unique connection ID
    pub id: ConnectionId,
    /// When the connection was established
    pub connected_at: DateTime<Utc>,
    sender: mpsc::UnboundedSender<OutboundFrame>,
    alive: AtomicBool,
    close_signal: Notify,
}

impl ConnectionHandle {
    /// Create a new connection handle and the receiving end of its queue.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutboundFrame>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = Self {
            id: Uuid::new_v4(),
            connected_at: Utc::now(),
            sender,
            alive: AtomicBool::new(true),
            close_signal: Notify::new(),
        };
        (handle, receiver)
    }

    /// Queue a text frame. Returns `false` if the connection is gone.
    pub fn send(&self, text: String) -> bool {
        if !self.is_alive() {
            return false;
        }
        if self.sender.send(OutboundFrame::Text(text)).is_err() {
            self.alive.store(false, Ordering::SeqCst);
            return false;
        }
        true
    }

    /// Check if connection is alive
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Ask the connection to close. Idempotent.
    pub fn close(&self) {
        if self.alive.swap(false, Ordering::SeqCst) {
            let _ = self.sender.send(OutboundFrame::Close);
            self.close_signal.notify_one();
        }
    }

    /// Resolves once [`close`](Self::close) has been called.
    pub async fn closed(&self) {
        if !self.is_alive() {
            return;
        }
        self.close_signal.notified().await;
    }
}
