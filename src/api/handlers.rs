use super::types::{AskRequest, AskResponse, ErrorResponse, HealthResponse};
use crate::answer::{format_answer, format_no_match};
use crate::search::{MatchPolicy, SimilarityIndex};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub const EMPTY_QUESTION_DETAIL: &str = "Question must not be empty.";

pub async fn handle_ask(
    Extension(index): Extension<Arc<SimilarityIndex>>,
    Extension(policy): Extension<MatchPolicy>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    if req.question.trim().is_empty() {
        tracing::warn!("Rejected empty question");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: EMPTY_QUESTION_DETAIL.to_string(),
            }),
        ));
    }

    let result = index.best_match(&req.question);
    let section = index
        .section(result.index)
        .filter(|_| policy.is_confident(&result));

    let (answer, section) = match section {
        Some(section) => {
            tracing::info!(
                "Answered {:?} with section {:?} (score {:.4})",
                req.question,
                section.title,
                result.score
            );
            (
                format_answer(section, &req.question),
                Some(section.title.clone()),
            )
        }
        None => {
            tracing::warn!(
                "No confident match for {:?} (best score {:.4}, minimum {:.4})",
                req.question,
                result.score,
                policy.min_score
            );
            (format_no_match(&req.question), None)
        }
    };

    Ok(Json(AskResponse {
        question: req.question,
        answer,
        section,
        score: result.score,
    }))
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
