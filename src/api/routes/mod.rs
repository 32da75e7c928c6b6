//! API routes module

pub mod chat;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::{Router, routing::get};

type SharedState = Arc<AppState>;

async fn health() -> &'static str {
    "ok"
}

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat routes
        .nest("/chat", chat::router())
        .route("/health", get(health))
}
