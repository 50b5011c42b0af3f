use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body. FastAPI-style backends put a string here for business errors
/// and a list of objects for validation errors, so only strings are surfaced.
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Result of a signup/unregister request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Accepted { message: String },
    Rejected { status: StatusCode, detail: Option<String> },
}
