mod core;
mod models;

pub use self::core::Responder;
pub use self::models::{Transcript, Turn};
