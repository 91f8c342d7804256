//! Inbound chat frame validation.

use validator::Validate;

use hotbeans_core::error::AppError;
use hotbeans_entity::chat::CreateChatMessage;

/// Decode and validate an inbound chat frame.
///
/// Fails with a validation error when the text is not JSON, lacks
/// `user_name` or `message`, carries an unknown `message_type`, or has a
/// blank required field.
pub fn parse_chat_payload(raw: &str) -> Result<CreateChatMessage, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::validation("Empty message"));
    }

    let payload: CreateChatMessage = serde_json::from_str(raw)
        .map_err(|e| AppError::validation(format!("Invalid chat message: {e}")))?;
    payload.validate()?;
    Ok(payload)
}
