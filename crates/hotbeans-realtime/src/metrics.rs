//! Relay metrics counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Relay-level counters.
#[derive(Debug, Default)]
pub struct RelayMetrics {
    connections_total: AtomicU64,
    connections_active: AtomicU64,
    messages_relayed: AtomicU64,
    messages_rejected: AtomicU64,
    deliveries: AtomicU64,
}

impl RelayMetrics {
    /// Create new zeroed metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new connection
    pub fn connection_opened(&self) {
        self.connections_total.fetch_add(1, Ordering::Relaxed);
        self.connections_active.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a disconnection
    pub fn connection_closed(&self) {
        let _ = self
            .connections_active
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
    }

    /// Record an accepted message and how many clients it was queued for.
    pub fn message_relayed(&self, recipients: usize) {
        self.messages_relayed.fetch_add(1, Ordering::Relaxed);
        self.deliveries
            .fetch_add(recipients as u64, Ordering::Relaxed);
    }

    /// Record a rejected inbound frame
    pub fn message_rejected(&self) {
        self.messages_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of all metrics
    pub fn snapshot(&self) -> RelayMetricsSnapshot {
        RelayMetricsSnapshot {
            connections_total: self.connections_total.load(Ordering::Relaxed),
            connections_active: self.connections_active.load(Ordering::Relaxed),
            messages_relayed: self.messages_relayed.load(Ordering::Relaxed),
            messages_rejected: self.messages_rejected.load(Ordering::Relaxed),
            deliveries: self.deliveries.load(Ordering::Relaxed),
        }
    }
}

/// Serializable metrics snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMetricsSnapshot {
    /// Connections ever opened
    pub connections_total: u64,
    /// Currently open connections
    pub connections_active: u64,
    /// Inbound messages accepted and broadcast
    pub messages_relayed: u64,
    /// Inbound frames rejected as malformed
    pub messages_rejected: u64,
    /// Individual frames queued to clients
    pub deliveries: u64,
}
