//! Chat message records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use hotbeans_core::traits::Document;
use hotbeans_core::types::ChatMessageId;

use crate::validation::not_blank;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// A site visitor.
    #[default]
    User,
    /// Staff answering visitors.
    Admin,
}

impl MessageType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier.
    pub id: ChatMessageId,
    /// Display name of the author.
    pub user_name: String,
    /// Message text.
    pub message: String,
    /// When the server accepted the message.
    pub timestamp: DateTime<Utc>,
    /// Author category.
    pub message_type: MessageType,
}

impl ChatMessage {
    /// Build a new record from a validated payload.
    pub fn new(input: CreateChatMessage) -> Self {
        Self {
            id: ChatMessageId::new(),
            user_name: input.user_name,
            message: input.message,
            timestamp: Utc::now(),
            message_type: input.message_type,
        }
    }
}

impl Document for ChatMessage {
    const COLLECTION: &'static str = "chat_messages";

    fn document_id(&self) -> String {
        self.id.to_string()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Payload accepted from HTTP and WebSocket clients.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateChatMessage {
    /// Display name of the author.
    #[validate(custom(function = "not_blank", message = "user_name must not be blank"))]
    pub user_name: String,
    /// Message text.
    #[validate(custom(function = "not_blank", message = "message must not be blank"))]
    pub message: String,
    /// Author category, `user` when omitted.
    #[serde(default)]
    pub message_type: MessageType,
}
