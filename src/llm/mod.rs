mod client;
mod guard;
mod ollama;
mod types;

pub use client::{OpenAiClient, TextGenerator};
pub use guard::GuardedGenerator;
pub use ollama::OllamaClient;
pub use types::ChatMessage;

use crate::{
    Result,
    config::{LlmConfig, Provider},
};
use tracing::info;

/// Builds the configured backend wrapped in its timeout and retry guard.
pub fn create_generator(config: &LlmConfig) -> Result<Box<dyn TextGenerator>> {
    let backend: Box<dyn TextGenerator> = match config.provider {
        Provider::Ollama => Box::new(OllamaClient::new(config)?),
        Provider::Openai => Box::new(OpenAiClient::new(config)),
    };

    info!(
        "Using {:?} backend at {} with model {} (timeout {}s, {} retries)",
        config.provider,
        config.endpoint(),
        config.model,
        config.timeout_secs,
        config.max_retries
    );

    Ok(Box::new(
        GuardedGenerator::new(backend, config.timeout()).with_max_retries(config.max_retries),
    ))
}
