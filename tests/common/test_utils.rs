use coding_assistant_rust::{
    assistant::Assistant,
    config::{AssistantConfig, Config, LlmConfig, LogsConfig, Provider, ServerConfig},
    domain::Domain,
    llm::TextGenerator,
};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        llm: LlmConfig {
            provider: Provider::Ollama,
            base_url: Some("http://127.0.0.1:11434".to_string()),
            model: "llama3".to_string(),
            timeout_secs: 5,
            ..LlmConfig::default()
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        assistant: AssistantConfig {
            default_domain: Domain::General,
            min_question_chars: 5,
        },
    }
}

/// Assistant backed by the given generator and the test configuration
pub fn create_test_assistant(generator: impl TextGenerator + 'static) -> Assistant {
    Assistant::with_generator(Box::new(generator), &create_test_config().assistant)
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
llm:
  provider: ollama
  base_url: "http://localhost:11434"
  model: "llama3"
  temperature: 0.7
  timeout_secs: 30

server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

assistant:
  default_domain: "SQL"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: "not-a-number"
"#;
