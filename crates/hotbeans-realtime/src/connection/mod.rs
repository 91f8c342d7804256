//! Chat connection tracking: per-connection handles and the shared registry.

pub mod handle;
pub mod registry;

pub use handle::{ConnectionHandle, ConnectionId, OutboundFrame};
pub use registry::ConnectionRegistry;
