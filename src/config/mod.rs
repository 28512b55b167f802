mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(config_path).await
}

pub async fn load_from(config_path: impl AsRef<Path>) -> Result<Config> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from: {}", config_path.display());

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let mut config = parse(&config_str)?;

    if config.llm.api_key.is_empty() {
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            debug!("Using API key from OPENAI_API_KEY");
            config.llm.api_key = key;
        }
    }

    config.validate()?;
    Ok(config)
}

/// Parses a YAML document; an empty document yields the defaults.
pub fn parse(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.llm.provider, Provider::Ollama);
        assert_eq!(config.llm.model, "llama3");
        assert_eq!(config.llm.max_retries, 0);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.assistant.default_domain, Domain::General);
        assert_eq!(config.assistant.min_question_chars, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_document() {
        let config = parse(
            r#"
llm:
  provider: openai
  base_url: "https://api.openai.com/v1"
  api_key: "sk-test"
  model: "gpt-4o-mini"
  temperature: 0.2
  max_tokens: 512
  timeout_secs: 15
  max_retries: 2
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: debug
assistant:
  default_domain: "Data Science"
  min_question_chars: 8
"#,
        )
        .unwrap();

        assert_eq!(config.llm.provider, Provider::Openai);
        assert_eq!(config.llm.temperature, Some(0.2));
        assert_eq!(config.llm.max_tokens, Some(512));
        assert_eq!(config.llm.timeout().as_secs(), 15);
        assert_eq!(config.llm.max_retries, 2);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.assistant.default_domain, Domain::DataScience);
        assert_eq!(config.assistant.min_question_chars, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_openai_requires_api_key() {
        let config = parse("llm:\n  provider: openai\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = parse("llm:\n  timeout_secs: 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_default_domain_fails_to_parse() {
        let result = parse("assistant:\n  default_domain: Rust\n");
        assert!(result.is_err());
    }
}
