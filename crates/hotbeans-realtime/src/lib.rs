//! # hotbeans-realtime
//!
//! Live chat relay for Hot Beans Web. Provides:
//!
//! - A sharded registry of connected chat clients
//! - Validation and persistence of inbound chat frames
//! - Verbatim fan-out of accepted frames to every connected client
//! - Relay counters for the health endpoint

pub mod connection;
pub mod message;
pub mod metrics;
pub mod relay;

pub use connection::{ConnectionHandle, ConnectionId, ConnectionRegistry, OutboundFrame};
pub use metrics::{RelayMetrics, RelayMetricsSnapshot};
pub use relay::ChatRelay;
