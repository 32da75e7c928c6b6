use anyhow::Result;
use rhythm_guide::cli;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine, the environment may already be set
    dotenvy::dotenv().ok();
    cli::run().await
}
