use std::env;
use std::fmt;

use crate::ai::prompt::INSTRUCTIONS;

#[derive(Clone)]
pub struct AppConfig {
    pub gemini_api_hostname: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub instructions: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        // A missing key is not an error here. It surfaces as a failed
        // response on the first call to the model.
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let gemini_api_hostname = env::var("RHYTHM_GUIDE_GEMINI_HOST")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let gemini_model = env::var("RHYTHM_GUIDE_GEMINI_MODEL")
            .unwrap_or_else(|_| "gemini-2.0-flash".to_string());
        let instructions =
            env::var("RHYTHM_GUIDE_SYSTEM_MESSAGE").unwrap_or_else(|_| INSTRUCTIONS.to_string());

        Self {
            gemini_api_hostname,
            gemini_api_key,
            gemini_model,
            instructions,
        }
    }
}

// Never print the API key
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.gemini_api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("AppConfig")
            .field("gemini_api_hostname", &self.gemini_api_hostname)
            .field("gemini_api_key", &key)
            .field("gemini_model", &self.gemini_model)
            .field("instructions_len", &self.instructions.chars().count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig {
            gemini_api_hostname: "http://localhost:1234".to_string(),
            gemini_api_key: "super-secret".to_string(),
            gemini_model: "gemini-2.0-flash".to_string(),
            instructions: "You are a helpful assistant.".to_string(),
        };
        let out = format!("{:?}", config);
        assert!(!out.contains("super-secret"));
        assert!(out.contains("<redacted>"));
        assert!(out.contains("gemini-2.0-flash"));
    }

    #[test]
    fn test_debug_marks_missing_api_key() {
        let config = AppConfig {
            gemini_api_hostname: "http://localhost:1234".to_string(),
            gemini_api_key: String::new(),
            gemini_model: "gemini-2.0-flash".to_string(),
            instructions: String::new(),
        };
        assert!(format!("{:?}", config).contains("<unset>"));
    }
}
