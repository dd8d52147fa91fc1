//! API Data Types
//!
//! Request and response bodies of the public HTTP interface.

use serde::{Deserialize, Serialize};

/// Body of `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Successful answer to a question.
///
/// `section` is the title of the matched section, or `None` when no section
/// was a confident match and `answer` holds the fallback message instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    pub section: Option<String>,
    pub score: f64,
}

/// Client-error body, e.g. for an empty question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
