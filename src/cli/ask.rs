use crate::ai::chat::Responder;
use crate::core::AppConfig;

/// Prints the reply to a single question, or the apology if the model
/// couldn't be reached.
pub async fn run(message: &str, config: &AppConfig) {
    let responder = Responder::from_config(config);

    match responder.respond(message, &[]).await {
        Ok(reply) => println!("{}", reply),
        Err(e) => {
            tracing::warn!("Ask failed: {:#}", e);
            println!("{}", responder.apologize(&e));
        }
    }
}
