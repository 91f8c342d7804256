//! Chat history service.
//!
//! Used by both the HTTP chat endpoints and the WebSocket relay, so a
//! message is validated and stored the same way regardless of transport.

use tracing::info;
use validator::Validate;

use hotbeans_core::config::ChatConfig;
use hotbeans_core::result::AppResult;
use hotbeans_core::traits::document::FindQuery;
use hotbeans_database::DocumentRepository;
use hotbeans_entity::chat::{ChatMessage, CreateChatMessage};

/// Validates, stores and replays chat messages.
#[derive(Debug, Clone)]
pub struct ChatService {
    repo: DocumentRepository<ChatMessage>,
    config: ChatConfig,
}

impl ChatService {
    /// Creates a new chat service.
    pub fn new(repo: DocumentRepository<ChatMessage>, config: ChatConfig) -> Self {
        Self { repo, config }
    }

    /// Validate and persist a message. Blank fields yield a validation error.
    pub async fn post(&self, input: CreateChatMessage) -> AppResult<ChatMessage> {
        input.validate()?;

        let message = ChatMessage::new(input);
        self.repo.create(&message).await?;

        info!(
            id = %message.id,
            user_name = %message.user_name,
            message_type = %message.message_type,
            "Chat message stored"
        );
        Ok(message)
    }

    /// The most recent messages, returned oldest-first.
    ///
    /// `limit` falls back to the configured default and is clamped to
    /// `1..=max_history_limit`.
    pub async fn history(&self, limit: Option<usize>) -> AppResult<Vec<ChatMessage>> {
        let limit = self.config.effective_limit(limit);
        let mut messages = self.repo.list(FindQuery::newest_first(limit)).await?;
        messages.reverse();
        Ok(messages)
    }
}
