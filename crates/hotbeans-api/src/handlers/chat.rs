//! Chat REST handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;

use hotbeans_core::error::AppError;
use hotbeans_entity::chat::{ChatMessage, CreateChatMessage};

use crate::dto::request::ChatHistoryQuery;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/chat/message
pub async fn post_message(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateChatMessage>,
) -> Result<Json<ChatMessage>, ApiError> {
    let message = state.chat_service.post(req).await?;
    Ok(Json(message))
}

/// GET /api/chat/messages?limit=N
pub async fn get_messages(
    State(state): State<AppState>,
    query: Result<Query<ChatHistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let messages = state.chat_service.history(query.limit).await?;
    Ok(Json(messages))
}
