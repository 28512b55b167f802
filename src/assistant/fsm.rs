use crate::{Error, Result};
use tracing::{debug, warn};
use uuid::Uuid;

// Request states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Validating,
    Rejected,
    Dispatching,
    Succeeded,
    Failed,
}

// Request events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    Received,
    ValidationPassed,
    ValidationFailed,
    BackendResponded,
    BackendFailed,
}

/// Lifecycle of a single question. Every path ends in a terminal state and
/// `Dispatching` is entered at most once.
#[derive(Debug)]
pub struct RequestStateMachine {
    request_id: Uuid,
    state: RequestState,
}

impl RequestStateMachine {
    pub fn new(request_id: Uuid) -> Self {
        Self {
            request_id,
            state: RequestState::Idle,
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn current_state(&self) -> RequestState {
        self.state
    }

    pub fn transition(&mut self, event: RequestEvent) -> Result<()> {
        let new_state = match (self.state, event) {
            (RequestState::Idle, RequestEvent::Received) => RequestState::Validating,
            (RequestState::Validating, RequestEvent::ValidationFailed) => RequestState::Rejected,
            (RequestState::Validating, RequestEvent::ValidationPassed) => {
                RequestState::Dispatching
            }
            (RequestState::Dispatching, RequestEvent::BackendResponded) => {
                RequestState::Succeeded
            }
            (RequestState::Dispatching, RequestEvent::BackendFailed) => RequestState::Failed,
            (current, requested) => {
                warn!(
                    "Invalid transition for request {} from {:?} with event {:?}",
                    self.request_id, current, requested
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", current),
                    requested: format!("{:?}", requested),
                });
            }
        };

        debug!(
            "Request {} state transition: {:?} -> {:?} (event: {:?})",
            self.request_id, self.state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            RequestState::Rejected | RequestState::Succeeded | RequestState::Failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fsm() -> RequestStateMachine {
        RequestStateMachine::new(Uuid::new_v4())
    }

    #[test]
    fn test_initial_state() {
        let fsm = fsm();
        assert_eq!(fsm.current_state(), RequestState::Idle);
        assert!(!fsm.is_terminal());
    }

    #[test]
    fn test_rejected_path() {
        let mut fsm = fsm();
        fsm.transition(RequestEvent::Received).unwrap();
        fsm.transition(RequestEvent::ValidationFailed).unwrap();
        assert_eq!(fsm.current_state(), RequestState::Rejected);
        assert!(fsm.is_terminal());
    }

    #[test]
    fn test_succeeded_path() {
        let mut fsm = fsm();
        fsm.transition(RequestEvent::Received).unwrap();
        fsm.transition(RequestEvent::ValidationPassed).unwrap();
        assert_eq!(fsm.current_state(), RequestState::Dispatching);
        assert!(!fsm.is_terminal());
        fsm.transition(RequestEvent::BackendResponded).unwrap();
        assert_eq!(fsm.current_state(), RequestState::Succeeded);
        assert!(fsm.is_terminal());
    }

    #[test]
    fn test_failed_path() {
        let mut fsm = fsm();
        fsm.transition(RequestEvent::Received).unwrap();
        fsm.transition(RequestEvent::ValidationPassed).unwrap();
        fsm.transition(RequestEvent::BackendFailed).unwrap();
        assert_eq!(fsm.current_state(), RequestState::Failed);
        assert!(fsm.is_terminal());
    }

    #[test]
    fn test_dispatching_is_never_reentered() {
        let mut fsm = fsm();
        fsm.transition(RequestEvent::Received).unwrap();
        fsm.transition(RequestEvent::ValidationPassed).unwrap();
        fsm.transition(RequestEvent::BackendFailed).unwrap();

        let err = fsm.transition(RequestEvent::ValidationPassed).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { .. }));
        assert_eq!(fsm.current_state(), RequestState::Failed);
    }

    #[test]
    fn test_cannot_dispatch_without_validation() {
        let mut fsm = fsm();
        assert!(fsm.transition(RequestEvent::BackendResponded).is_err());
        assert_eq!(fsm.current_state(), RequestState::Idle);
    }
}
