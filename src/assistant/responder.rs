use crate::{domain::Domain, llm::TextGenerator, prompt::InstructionSet};
use tracing::{debug, error, trace};

/// What a single backend call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Backend text, exactly as returned.
    Generated(String),
    /// The backend could not produce an answer; details are only in the logs.
    Failure,
}

impl Response {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Generated(text) => Some(text),
            Self::Failure => None,
        }
    }
}

/// Sends one domain-locked instruction set per call and never lets a backend
/// error escape.
///
/// Domain-locking is only as strong as the backend's obedience to the
/// instructions; the generated text is not inspected.
pub struct Responder {
    generator: Box<dyn TextGenerator>,
}

impl Responder {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn respond(&self, question: &str, domain: Domain) -> Response {
        let instructions = InstructionSet::build(domain, question);
        trace!("Instruction set:\n{}", instructions);

        match self.generator.generate(&instructions).await {
            Ok(text) => {
                debug!("Backend returned {} characters", text.len());
                Response::Generated(text)
            }
            Err(e) => {
                error!(
                    domain = %domain,
                    question = %question,
                    "Backend call failed: {}",
                    e
                );
                Response::Failure
            }
        }
    }
}
