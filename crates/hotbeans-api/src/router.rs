//! Route definitions for the Hot Beans Web HTTP API.
//!
//! JSON routes are mounted under `/api`, the chat socket at `/ws/chat`, and
//! the two storage roots are served as static trees.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = match state.config.storage.max_upload_size_bytes {
        Some(max) => DefaultBodyLimit::max(usize::try_from(max).unwrap_or(usize::MAX)),
        None => DefaultBodyLimit::disable(),
    };

    let api_routes = Router::new()
        .merge(status_routes())
        .merge(chat_routes())
        .merge(upload_routes())
        .merge(application_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws/chat", get(handlers::ws::ws_chat));

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/api", get(handlers::root::root))
        .route("/api/", get(handlers::root::root))
        .nest("/api", api_routes)
        .merge(ws_routes)
        .nest_service("/images", ServeDir::new(state.images.root()))
        .nest_service("/uploads", ServeDir::new(state.uploads.root()))
        .layer(body_limit)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Status check endpoints
fn status_routes() -> Router<AppState> {
    Router::new().route(
        "/status",
        post(handlers::status::create_status_check).get(handlers::status::list_status_checks),
    )
}

/// Chat history and REST posting
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/message", post(handlers::chat::post_message))
        .route("/chat/messages", get(handlers::chat::get_messages))
}

/// CV and image uploads
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/upload/cv", post(handlers::upload::upload_cv))
        .route("/uploads", get(handlers::upload::list_uploads))
        .route("/upload/image", post(handlers::upload::upload_image))
}

/// Job application endpoints
fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/job-applications",
            post(handlers::application::submit_application)
                .get(handlers::application::list_applications),
        )
        .route(
            "/job-applications/{id}",
            get(handlers::application::get_application),
        )
}

/// Health check (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
