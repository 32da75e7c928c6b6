//! Router for the chat API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use super::public;
use crate::ai::prompt::{DESCRIPTION, EXAMPLES, TITLE};
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Answer the next message of a conversation. Always responds with a
/// message: when the model fails the user gets an apology that says
/// what went wrong instead of an error status.
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Json<public::ChatResponse> {
    let message = match state
        .responder
        .respond(&payload.message, &payload.history)
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Chat handler error: {}. Root cause: {}", e, e.root_cause());
            state.responder.apologize(&e)
        }
    };

    Json(public::ChatResponse::new(&message))
}

/// Preview the exact context that would be sent to the model for
/// this message and history, without calling it
async fn chat_context(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatContextResponse>, ApiError> {
    let context = state
        .responder
        .build_context(&payload.message, &payload.history)?;

    Ok(Json(public::ChatContextResponse { context }))
}

/// Title, welcome text and example prompts for a chat widget
async fn chat_info() -> Json<public::ChatInfoResponse> {
    Json(public::ChatInfoResponse {
        title: TITLE.to_string(),
        description: DESCRIPTION.to_string(),
        examples: EXAMPLES.iter().map(|s| s.to_string()).collect(),
    })
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/context", post(chat_context))
        .route("/info", get(chat_info))
}
