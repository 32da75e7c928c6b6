use std::fmt;
use std::time::Duration;

use anyhow::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Anything that can turn a prompt into reply text with a single
/// request. No streaming, no tools, no structured output.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, Error>;
}

/// Failures reported by the Gemini API itself. Transport and decoding
/// failures are passed through as the underlying `reqwest` error.
#[derive(Debug, ThisError, PartialEq)]
pub enum GeminiError {
    #[error("Gemini API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("prompt was blocked by Gemini: {0}")]
    Blocked(String),
    #[error("Gemini returned no text (finish reason: {finish_reason})")]
    EmptyResponse { finish_reason: String },
}

// {
//   "contents": [
//     {"role": "user", "parts": [{"text": "..."}]}
//   ]
// }
#[derive(Serialize, Debug)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize, Debug)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate.
    fn into_text(self) -> Result<String, GeminiError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
                return Err(GeminiError::Blocked(reason));
            }
            return Err(GeminiError::EmptyResponse {
                finish_reason: String::from("NO_CANDIDATES"),
            });
        };

        let parts: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if parts.is_empty() {
            return Err(GeminiError::EmptyResponse {
                finish_reason: candidate
                    .finish_reason
                    .unwrap_or_else(|| String::from("UNSPECIFIED")),
            });
        }

        Ok(parts.concat())
    }
}

// {"error": {"code": 400, "message": "API key not valid...", "status": "INVALID_ARGUMENT"}}
#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    message: String,
}

/// Client for the Gemini `generateContent` endpoint. Read-only after
/// construction so it can be shared between concurrent requests.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_hostname.trim_end_matches("/"),
            self.model
        )
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_hostname", &self.api_hostname)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Backend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let payload = GenerateContentRequest::new(prompt);

        tracing::debug!(
            "Requesting completion from {} ({} chars)",
            &self.model,
            prompt.chars().count()
        );

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .timeout(Duration::from_secs(60 * 5))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to read error body: {}", e);
                String::new()
            });
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(b) => b.error.message,
                // Keep the apology descriptive when there's nothing to show
                Err(_) if body.trim().is_empty() => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
                Err(_) => body,
            };
            return Err(GeminiError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let resp: GenerateContentResponse = response.json().await?;
        let text = resp.into_text()?;

        Ok(text)
    }
}
