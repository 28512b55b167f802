use super::types::{AskRequest, AskResponse, DomainInfo, ErrorResponse, HealthResponse};
use crate::{
    assistant::{Assistant, Outcome},
    domain::Domain,
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const UNAVAILABLE_MESSAGE: &str =
    "The assistant is unavailable right now. Please try again later.";

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, request_id: Option<Uuid>, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            request_id,
            error: message,
        }),
    )
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let domain = match request.domain.as_deref() {
        Some(name) => name.parse::<Domain>().map_err(|e| {
            warn!("Request {} named an unknown domain: {}", request_id, e);
            api_error(StatusCode::BAD_REQUEST, Some(request_id), e.to_string())
        })?,
        None => state.assistant.default_domain(),
    };

    info!("Received question {} for domain {}", request_id, domain);

    match state
        .assistant
        .ask(request_id, request.question.as_deref(), domain)
        .await
    {
        Ok(Outcome::Answered(answer)) => Ok(Json(AskResponse {
            request_id,
            domain,
            answer,
        })),
        Ok(Outcome::Rejected) => Err(api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(request_id),
            format!(
                "Please enter a clearer question (at least {} characters).",
                state.assistant.min_question_chars()
            ),
        )),
        Ok(Outcome::Unavailable) => Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            Some(request_id),
            UNAVAILABLE_MESSAGE.to_string(),
        )),
        Err(e) => {
            error!("Failed to process request {}: {}", request_id, e);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                Some(request_id),
                "Internal error".to_string(),
            ))
        }
    }
}

pub async fn domains() -> Json<Vec<DomainInfo>> {
    Json(
        Domain::ALL
            .iter()
            .map(|domain| DomainInfo {
                name: *domain,
                scope: domain.topics().to_vec(),
            })
            .collect(),
    )
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        stateless: true,
    })
}
