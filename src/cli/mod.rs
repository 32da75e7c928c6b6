use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod ask;
pub mod chat;
pub mod examples;
pub mod serve;

use crate::core::{AppConfig, logging};

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "7860")]
        port: String,
    },
    /// Start an interactive chat session
    Chat {},
    /// Ask a single question without any history
    Ask {
        #[arg(long)]
        message: String,
    },
    /// List example questions
    Examples {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Read once at startup and passed down from here
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            logging::init(logging::server_directives());
            serve::run(host, port, config).await?;
        }
        Some(Command::Chat {}) => {
            logging::init(logging::terminal_directives());
            chat::run(&config).await?;
        }
        Some(Command::Ask { message }) => {
            logging::init(logging::terminal_directives());
            ask::run(&message, &config).await;
        }
        Some(Command::Examples {}) => {
            examples::run();
        }
        None => {}
    }

    Ok(())
}
