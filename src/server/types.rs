use crate::domain::Domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Absent or null questions are rejected by the validator like short ones.
    #[serde(default)]
    pub question: Option<String>,
    /// Display name or short form; the configured default when omitted.
    #[serde(default)]
    pub domain: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub request_id: Uuid,
    pub domain: Domain,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct DomainInfo {
    pub name: Domain,
    pub scope: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub stateless: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    pub error: String,
}
