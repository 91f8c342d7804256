//! Frames the relay generates itself.
//!
//! Accepted chat frames are forwarded verbatim and never re-serialized;
//! only relay-originated frames are defined here.

use serde::{Deserialize, Serialize};

/// Error code sent for a rejected inbound frame.
pub const INVALID_MESSAGE: &str = "INVALID_MESSAGE";

/// Messages sent by the server to a single client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Error message.
    Error {
        /// Error code.
        code: String,
        /// Error description.
        message: String,
    },
}

impl OutboundMessage {
    /// An `INVALID_MESSAGE` error frame.
    pub fn invalid_message(message: impl Into<String>) -> Self {
        Self::Error {
            code: INVALID_MESSAGE.to_string(),
            message: message.into(),
        }
    }

    /// Serialize to the JSON text sent on the wire.
    pub fn to_text(&self) -> String {
        match serde_json::to_string(self) {
            Ok(text) => text,
            Err(_) => format!(r#"{{"type":"error","code":"{INVALID_MESSAGE}","message":""}}"#),
        }
    }
}
