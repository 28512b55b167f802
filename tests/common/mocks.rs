use async_trait::async_trait;
use coding_assistant_rust::{
    Error, Result,
    domain::Domain,
    llm::TextGenerator,
    prompt::{InstructionSet, refusal_message},
};
use mockall::mock;
use std::sync::{Arc, Mutex};

mock! {
    pub Generator {}

    #[async_trait]
    impl TextGenerator for Generator {
        async fn generate(&self, instructions: &InstructionSet) -> Result<String>;
    }
}

/// Mock backend that replies with a fixed text or error and records every call
#[derive(Debug, Clone)]
pub struct RecordingGenerator {
    pub reply: std::result::Result<String, String>,
    pub calls: Arc<Mutex<Vec<InstructionSet>>>,
}

impl RecordingGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            reply: Err(error.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<InstructionSet> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, instructions: &InstructionSet) -> Result<String> {
        self.calls.lock().unwrap().push(instructions.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(error) => Err(Error::llm(error.clone())),
        }
    }
}

/// Mock backend that follows the refusal rule the way an obedient model would:
/// it answers only when the question mentions a keyword of the selected domain.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObedientGenerator;

impl ObedientGenerator {
    fn keywords(domain: Domain) -> &'static [&'static str] {
        match domain {
            Domain::Sql => &["sql", "join", "select", "index", "duplicate records"],
            Domain::Python => &["python", "decorator", "list comprehension", "pandas"],
            Domain::MachineLearning => &["gradient descent", "overfitting", "model"],
            Domain::DataScience => &["eda", "feature engineering", "visualization"],
            Domain::General => &["big-o", "complexity", "compiler"],
        }
    }

    pub fn answer_for(domain: Domain, question: &str) -> String {
        format!("[{}] {}", domain, question)
    }
}

#[async_trait]
impl TextGenerator for ObedientGenerator {
    async fn generate(&self, instructions: &InstructionSet) -> Result<String> {
        assert!(
            instructions
                .system
                .contains(&refusal_message(instructions.domain))
        );

        let question = instructions.question.to_lowercase();
        let in_domain = Self::keywords(instructions.domain)
            .iter()
            .any(|keyword| question.contains(keyword));

        if in_domain {
            Ok(Self::answer_for(instructions.domain, &instructions.question))
        } else {
            Ok(refusal_message(instructions.domain))
        }
    }
}
