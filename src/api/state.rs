use crate::ai::chat::Responder;
use crate::core::AppConfig;

/// Read-only after startup, so handlers share it through an `Arc`
/// without taking a lock.
pub struct AppState {
    pub responder: Responder,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            responder: Responder::from_config(config),
        }
    }
}
