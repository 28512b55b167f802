//! Client for a local Ollama server's `/api/chat` endpoint.

use super::{client::TextGenerator, types::ChatMessage};
use crate::{Error, Result, config::LlmConfig, prompt::InstructionSet};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    options: Option<OllamaOptions>,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        let options = if config.temperature.is_some() || config.max_tokens.is_some() {
            Some(OllamaOptions {
                temperature: config.temperature,
                num_predict: config.max_tokens,
            })
        } else {
            None
        };

        Ok(Self {
            client,
            base_url: config.endpoint(),
            model: config.model.clone(),
            options,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, instructions: &InstructionSet) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        debug!(
            "Sending chat request to {} with model {} for domain {}",
            url, self.model, instructions.domain
        );

        let body = OllamaRequest {
            model: &self.model,
            messages: ChatMessage::from_instructions(instructions),
            stream: false,
            options: self.options.as_ref(),
        };

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Ollama API error {}: {}",
                status, error_text
            )));
        }

        let reply: OllamaResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("Invalid Ollama response: {}", e)))?;

        debug!(
            "Ollama responded with model {} (prompt tokens: {:?}, completion tokens: {:?})",
            reply.model, reply.prompt_eval_count, reply.eval_count
        );

        Ok(reply.message.content)
    }
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a OllamaOptions>,
}

#[derive(Debug, Clone, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    model: String,
    message: ChatMessage,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}
