//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::Arc;

use axum::{Router, body::Body};

use rhythm_guide::ai::prompt::INSTRUCTIONS;
use rhythm_guide::api::AppState;
use rhythm_guide::api::app;
use rhythm_guide::core::AppConfig;

pub const TEST_MODEL: &str = "gemini-2.0-flash";
pub const TEST_API_KEY: &str = "test-api-key";

/// Path the Gemini client posts to for `TEST_MODEL`
pub fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", TEST_MODEL)
}

pub fn test_config(gemini_api_hostname: &str) -> AppConfig {
    AppConfig {
        gemini_api_hostname: gemini_api_hostname.to_string(),
        gemini_api_key: String::from(TEST_API_KEY),
        gemini_model: String::from(TEST_MODEL),
        instructions: String::from(INSTRUCTIONS),
    }
}

/// Creates a test application router that sends model requests to
/// `gemini_api_hostname`, usually a `mockito` server.
pub fn test_app(gemini_api_hostname: &str) -> Router {
    let app_state = AppState::new(&test_config(gemini_api_hostname));
    app(Arc::new(app_state))
}

/// A `generateContent` response body with a single text candidate
pub fn gemini_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
            "index": 0
        }],
        "modelVersion": TEST_MODEL
    })
    .to_string()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
