//! Registry of all active chat connections.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;

use super::handle::{ConnectionHandle, ConnectionId, OutboundFrame};

/// Thread-safe set of active WebSocket connections.
///
/// Each connect/disconnect is an exclusive entry operation on one shard.
/// Readers take a snapshot so no map guard is held while sending.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    by_id: DashMap<ConnectionId, Arc<ConnectionHandle>>,
}

impl ConnectionRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fresh connection and returns its handle and outbound queue.
    pub fn register(&self) -> (Arc<ConnectionHandle>, mpsc::UnboundedReceiver<OutboundFrame>) {
        let (handle, rx) = ConnectionHandle::new();
        let handle = Arc::new(handle);
        self.by_id.insert(handle.id, handle.clone());
        (handle, rx)
    }

    /// Removes a connection from the registry.
    pub fn unregister(&self, conn_id: &ConnectionId) -> Option<Arc<ConnectionHandle>> {
        self.by_id.remove(conn_id).map(|(_, handle)| handle)
    }

    /// Gets a specific connection by ID.
    pub fn get(&self, conn_id: &ConnectionId) -> Option<Arc<ConnectionHandle>> {
        self.by_id.get(conn_id).map(|entry| entry.value().clone())
    }

    /// Returns all connection handles.
    pub fn snapshot(&self) -> Vec<Arc<ConnectionHandle>> {
        self.by_id
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Returns total number of active connections.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no client is connected.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Close and remove every connection. Returns how many were closed.
    pub fn close_all(&self) -> usize {
        let handles = self.snapshot();
        for handle in &handles {
            handle.close();
            self.by_id.remove(&handle.id);
        }
        handles.len()
    }
}
