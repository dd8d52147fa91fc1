use serde::{Deserialize, Serialize};

/// The best-scoring section for a query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Position of the section in document order.
    pub index: usize,
    /// Cosine similarity in `[0, 1]`.
    pub score: f64,
}

/// Decides whether a top-1 match is good enough to answer with.
///
/// A match is confident when it shares at least one weighted term with the
/// query (`score > 0`) and reaches `min_score`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchPolicy {
    pub min_score: f64,
}

impl MatchPolicy {
    pub fn new(min_score: f64) -> Self {
        Self { min_score }
    }

    pub fn is_confident(&self, result: &MatchResult) -> bool {
        result.score > 0.0 && result.score >= self.min_score
    }
}
