//! Google Gemini text generation

mod core;

pub use self::core::{Backend, GeminiClient, GeminiError};
