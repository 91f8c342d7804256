//! API root greeting.

use axum::Json;

use crate::dto::response::MessageResponse;

/// Greeting returned by `GET /api/`.
pub const ROOT_MESSAGE: &str = "Hot Beans Web - Enhanced API with Chat & Upload Support";

/// GET /api/
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}
