//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::ai::chat::Turn;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Turn>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatContextResponse {
    pub context: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

impl ChatResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ChatInfoResponse {
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
}
