mod executor;
pub mod fsm;
mod responder;
mod validator;

pub use executor::{Assistant, Outcome};
pub use fsm::{RequestEvent, RequestState, RequestStateMachine};
pub use responder::{Responder, Response};
pub use validator::{MIN_QUESTION_CHARS, QueryValidator, validate};
