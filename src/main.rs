use anyhow::{Context, Result};
use coding_assistant_rust::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over `server.logs.level`; either may be a full filter directive.
fn log_filter(configured_level: &str) -> Result<EnvFilter> {
    let directive = std::env::var("RUST_LOG").unwrap_or_else(|_| configured_level.to_string());
    EnvFilter::try_new(&directive).with_context(|| {
        format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            directive
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is configured from the file, so load it first
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let filter = match log_filter(&config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!(
        "Starting coding assistant (default domain: {}, stateless: no memory is stored)",
        config.assistant.default_domain
    );

    server::run(config).await?;

    Ok(())
}
