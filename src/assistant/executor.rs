use super::{
    fsm::{RequestEvent, RequestStateMachine},
    responder::{Responder, Response},
    validator::QueryValidator,
};
use crate::{
    Result,
    config::{AssistantConfig, Config},
    domain::Domain,
    llm::{TextGenerator, create_generator},
};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Caller-visible result of one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The question was too short to send anywhere.
    Rejected,
    Answered(String),
    /// The backend failed; the caller should suggest trying again later.
    Unavailable,
}

/// Validates a question, then hands it to the responder. Holds no per-request
/// state, so one instance serves any number of concurrent requests.
pub struct Assistant {
    validator: QueryValidator,
    responder: Responder,
    default_domain: Domain,
}

impl Assistant {
    pub fn new(config: &Config) -> Result<Self> {
        let generator = create_generator(&config.llm)?;
        Ok(Self::with_generator(generator, &config.assistant))
    }

    pub fn with_generator(generator: Box<dyn TextGenerator>, config: &AssistantConfig) -> Self {
        info!(
            "Assistant ready (default domain: {}, minimum question length: {})",
            config.default_domain, config.min_question_chars
        );
        Self {
            validator: QueryValidator::new(config.min_question_chars),
            responder: Responder::new(generator),
            default_domain: config.default_domain,
        }
    }

    pub fn default_domain(&self) -> Domain {
        self.default_domain
    }

    pub fn min_question_chars(&self) -> usize {
        self.validator.min_chars()
    }

    /// `question` may be absent; that is rejected the same way as a short one.
    pub async fn ask<'a>(
        &self,
        request_id: Uuid,
        question: impl Into<Option<&'a str>>,
        domain: Domain,
    ) -> Result<Outcome> {
        let span = info_span!("ask", %request_id, %domain);
        self.run(request_id, question.into(), domain)
            .instrument(span)
            .await
    }

    async fn run(
        &self,
        request_id: Uuid,
        question: Option<&str>,
        domain: Domain,
    ) -> Result<Outcome> {
        let mut fsm = RequestStateMachine::new(request_id);
        fsm.transition(RequestEvent::Received)?;

        let question = match self.validator.check(question) {
            Ok(question) => question,
            Err(e) => {
                fsm.transition(RequestEvent::ValidationFailed)?;
                info!("Rejected question: {}", e);
                return Ok(Outcome::Rejected);
            }
        };
        fsm.transition(RequestEvent::ValidationPassed)?;

        let outcome = match self.responder.respond(question, domain).await {
            Response::Generated(text) => {
                fsm.transition(RequestEvent::BackendResponded)?;
                Outcome::Answered(text)
            }
            Response::Failure => {
                fsm.transition(RequestEvent::BackendFailed)?;
                Outcome::Unavailable
            }
        };

        debug_assert!(fsm.is_terminal());
        info!(
            "Request {} finished in state {:?}",
            fsm.request_id(),
            fsm.current_state()
        );
        Ok(outcome)
    }
}
