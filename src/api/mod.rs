//! HTTP API Module
//!
//! Thin Axum surface over the similarity index.
//!
//! ## Endpoints
//! - `POST /ask`: Answers a question from the best-matching manual section.
//! - `GET /health`: Liveness probe, independent of the index.
//!
//! Shared state (the index and the match policy) is injected with
//! `Extension` layers; handlers never mutate it.

pub mod handlers;
pub mod types;

use crate::search::{MatchPolicy, SimilarityIndex};
use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;

pub const ENDPOINT_ASK: &str = "/ask";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Builds the application router around an already-built index.
pub fn router(index: Arc<SimilarityIndex>, policy: MatchPolicy) -> Router {
    Router::new()
        .route(ENDPOINT_ASK, post(handlers::handle_ask))
        .route(ENDPOINT_HEALTH, get(handlers::handle_health))
        .layer(Extension(index))
        .layer(Extension(policy))
}

#[cfg(test)]
mod tests;
