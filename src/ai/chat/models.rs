//! The core models for a conversation with the guide.
use serde::{Deserialize, Serialize};

/// One completed exchange. Fields are private so a turn can't change
/// after it's been recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    user: String,
    assistant: String,
}

impl Turn {
    pub fn new(user: &str, assistant: &str) -> Self {
        Self {
            user: user.to_string(),
            assistant: assistant.to_string(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn assistant(&self) -> &str {
        &self.assistant
    }
}

/// Conversation history in chronological order. Owned by whatever is
/// hosting the conversation; the responder only ever borrows it.
#[derive(Default, Debug)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn push(&mut self, turn: Turn) {
        self.0.push(turn)
    }
}
