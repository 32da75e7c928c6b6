use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::{Responder, Transcript, Turn};
use crate::ai::prompt::{DESCRIPTION, TITLE};
use crate::core::AppConfig;

/// Answers one line of the session and returns what to print. Only a
/// successful reply becomes part of the transcript; a failed turn is
/// shown as an apology and never replayed to the model.
pub async fn turn(responder: &Responder, transcript: &mut Transcript, line: &str) -> String {
    match responder.respond(line, transcript.turns()).await {
        Ok(reply) => {
            transcript.push(Turn::new(line, &reply));
            reply
        }
        Err(e) => {
            tracing::warn!("Chat turn failed: {:#}", e);
            responder.apologize(&e)
        }
    }
}

pub async fn run(config: &AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let responder = Responder::from_config(config);

    // The session owns the history and lends it to the responder
    // on every turn
    let mut transcript = Transcript::new();

    println!("{}\n{}\n", TITLE, DESCRIPTION);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                println!("{}", turn(&responder, &mut transcript, &line).await);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
