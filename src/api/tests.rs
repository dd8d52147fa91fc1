//! API Module Tests
//!
//! Exercises the handlers directly, without binding a socket.
//!
//! ## Test Scopes
//! - **Validation**: Blank questions are rejected before the index is consulted.
//! - **Answers**: Matched sections are formatted and echoed back.
//! - **No Match**: Degenerate matches are reported explicitly.
//! - **Serialization**: JSON shape of the public DTOs.

#[cfg(test)]
mod tests {
    use crate::api::handlers::{handle_ask, handle_health, EMPTY_QUESTION_DETAIL};
    use crate::api::types::{AskRequest, AskResponse, ErrorResponse};
    use crate::search::{MatchPolicy, SimilarityIndex};
    use crate::sections::parse_sections;
    use axum::http::StatusCode;
    use axum::{Extension, Json};
    use std::sync::Arc;

    const MANUAL: &str = "\
### Reset Password
Click settings
Click reset
### Print Invoice
Open invoices
Click print
";

    fn index() -> Extension<Arc<SimilarityIndex>> {
        Extension(Arc::new(
            SimilarityIndex::build(parse_sections(MANUAL)).unwrap(),
        ))
    }

    async fn ask(
        question: &str,
        policy: MatchPolicy,
    ) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
        handle_ask(
            index(),
            Extension(policy),
            Json(AskRequest {
                question: question.to_string(),
            }),
        )
        .await
    }

    // ============================================================
    // VALIDATION
    // ============================================================

    #[tokio::test]
    async fn test_empty_question_is_rejected() {
        let Err((status, Json(body))) = ask("", MatchPolicy::default()).await else {
            panic!("empty question must be rejected");
        };

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, EMPTY_QUESTION_DETAIL);
    }

    #[tokio::test]
    async fn test_whitespace_question_is_rejected() {
        let result = ask("  \t\n ", MatchPolicy::default()).await;

        assert!(matches!(result, Err((status, _)) if status == StatusCode::BAD_REQUEST));
    }

    // ============================================================
    // ANSWERS
    // ============================================================

    #[tokio::test]
    async fn test_answer_for_matching_question() {
        let Ok(Json(response)) = ask("Reset Password", MatchPolicy::default()).await else {
            panic!("question should be answered");
        };

        assert_eq!(response.question, "Reset Password");
        assert_eq!(response.section.as_deref(), Some("Reset Password"));
        assert!(response.score > 0.0);
        assert!(response.answer.starts_with("**Reset Password**"));
        assert!(response.answer.contains("To reset password, follow these steps:"));
        assert!(response.answer.contains("1. **Click settings**"));
        assert!(response.answer.contains("2. **Click reset**"));
    }

    #[tokio::test]
    async fn test_question_is_echoed_verbatim() {
        let Ok(Json(response)) = ask("  How do I PRINT?  ", MatchPolicy::default()).await else {
            panic!("question should be answered");
        };

        assert_eq!(response.question, "  How do I PRINT?  ");
        assert_eq!(response.section.as_deref(), Some("Print Invoice"));
    }

    // ============================================================
    // NO MATCH
    // ============================================================

    #[tokio::test]
    async fn test_unrelated_question_reports_no_match() {
        let Ok(Json(response)) = ask("quantum flux", MatchPolicy::default()).await else {
            panic!("unrelated question is still a valid request");
        };

        assert_eq!(response.section, None);
        assert_eq!(response.score, 0.0);
        assert!(response.answer.contains("\"quantum flux\""));
    }

    #[tokio::test]
    async fn test_threshold_turns_weak_match_into_no_match() {
        // Only "click" overlaps, which every section shares.
        let Ok(Json(response)) = ask("click", MatchPolicy::new(0.99)).await else {
            panic!("question should be answered");
        };

        assert!(response.score > 0.0);
        assert_eq!(response.section, None);
    }

    // ============================================================
    // HEALTH & SERIALIZATION
    // ============================================================

    #[tokio::test]
    async fn test_health() {
        let Json(body) = handle_health().await;
        assert_eq!(body.status, "ok");
    }

    #[test]
    fn test_ask_request_requires_question() {
        let parsed: Result<AskRequest, _> = serde_json::from_str("{}");
        assert!(parsed.is_err());

        let parsed: AskRequest = serde_json::from_str(r#"{"question":"hi"}"#).unwrap();
        assert_eq!(parsed.question, "hi");
    }

    #[test]
    fn test_no_match_serializes_null_section() {
        let response = AskResponse {
            question: "q".to_string(),
            answer: "a".to_string(),
            section: None,
            score: 0.0,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["section"].is_null());
        assert_eq!(json["question"], "q");
    }
}
