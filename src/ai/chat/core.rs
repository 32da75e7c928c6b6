use std::sync::Arc;

use anyhow::{Error, Result};
use handlebars::Handlebars;
use serde_json::json;

use super::models::Turn;
use crate::ai::prompt::{Prompt, templates};
use crate::core::AppConfig;
use crate::gemini::{Backend, GeminiClient};

/// Builds the context for each turn of a conversation and asks the
/// backend for the next reply.
///
/// The responder holds no conversation state. Callers own the
/// history and pass it in on every call, so one responder can be
/// shared by any number of concurrent conversations.
///
/// Use `Responder::from_config` to talk to Gemini or `Responder::new`
/// to supply any other `Backend`.
pub struct Responder {
    instructions: String,
    backend: Arc<dyn Backend>,
    templates: Handlebars<'static>,
}

impl Responder {
    pub fn new(instructions: &str, backend: Arc<dyn Backend>) -> Self {
        Self {
            instructions: instructions.to_string(),
            backend,
            templates: templates(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let backend = GeminiClient::new(
            &config.gemini_api_hostname,
            &config.gemini_api_key,
            &config.gemini_model,
        );
        Self::new(&config.instructions, Arc::new(backend))
    }

    /// Serializes the instruction block, every turn of `history` in
    /// order, and `message` into the text sent to the backend. The
    /// whole history is replayed on every call; nothing is truncated.
    pub fn build_context(&self, message: &str, history: &[Turn]) -> Result<String, Error> {
        let context = self.templates.render(
            &Prompt::Context.to_string(),
            &json!({
                "instructions": self.instructions,
                "turns": history,
                "message": message,
            }),
        )?;
        Ok(context)
    }

    /// Runs the next turn of the conversation. Makes exactly one
    /// request to the backend, even for an empty message, and returns
    /// its text unchanged.
    pub async fn respond(&self, message: &str, history: &[Turn]) -> Result<String, Error> {
        let context = self.build_context(message, history)?;

        tracing::debug!(
            "Sending context with {} prior turns ({} chars)",
            history.len(),
            context.chars().count()
        );

        let reply = self.backend.generate(&context).await?;
        Ok(reply)
    }

    /// The message shown in place of a reply when `respond` fails.
    pub fn apologize(&self, err: &Error) -> String {
        let description = format!("{:#}", err);
        self.templates
            .render(
                &Prompt::Apology.to_string(),
                &json!({ "error": description }),
            )
            .unwrap_or_else(|e| {
                tracing::error!("Failed to render apology: {}", e);
                description
            })
    }
}
