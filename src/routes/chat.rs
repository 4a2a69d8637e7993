// src/routes/chat.rs
use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let trimmed = payload.user_message.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty.".to_string()));
    }

    Ok(Json(state.responder.respond(trimmed).await))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
