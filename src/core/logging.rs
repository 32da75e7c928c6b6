//! Logging setup shared by every subcommand. Output goes to stderr so
//! it never mixes with replies printed to stdout.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directives used by the API server when `RUST_LOG` is not set.
pub fn server_directives() -> String {
    // axum logs rejections from built-in extractors with the `axum::rejection`
    // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
    format!(
        "{}=debug,tower_http=debug,axum::rejection=trace",
        env!("CARGO_CRATE_NAME")
    )
}

/// Directives used by the terminal commands when `RUST_LOG` is not
/// set. Kept quiet so logs don't interleave with the conversation.
pub fn terminal_directives() -> String {
    "warn".to_string()
}

pub fn init(default_directives: String) {
    let result = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(e) = result {
        eprintln!("Logging was already initialized: {}", e);
    }
}
