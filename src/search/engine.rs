use super::types::MatchResult;
use super::vectorizer::{cosine_similarity, SparseVector, TermWeighting, TfidfModel};
use crate::error::QaError;
use crate::sections::Section;

/// Immutable vector-space index over the sections of one manual.
///
/// Row `i` of the matrix is the weight vector of `sections[i]`. The index is
/// built once and shared read-only between requests.
pub struct SimilarityIndex<W = TfidfModel> {
    sections: Vec<Section>,
    model: W,
    vectors: Vec<SparseVector>,
}

impl<W: TermWeighting> SimilarityIndex<W> {
    /// Fits the weighting model over the section bodies and vectorizes each one.
    ///
    /// # Errors
    /// * `QaError::EmptyCorpus` if `sections` is empty.
    /// * `QaError::EmptyVocabulary` if no section contains an indexable term.
    pub fn build(sections: Vec<Section>) -> Result<Self, QaError> {
        let corpus: Vec<&str> = sections.iter().map(|s| s.body.as_str()).collect();
        let model = W::fit(&corpus)?;
        let vectors = corpus.iter().map(|body| model.transform(body)).collect();

        tracing::info!("Built similarity index over {} sections", sections.len());

        Ok(Self {
            sections,
            model,
            vectors,
        })
    }

    /// Cosine similarity of the query against every section, in document order.
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let query_vector = self.model.transform(query);
        self.vectors
            .iter()
            .map(|row| cosine_similarity(&query_vector, row))
            .collect()
    }

    /// Returns the highest-scoring section. Ties go to the lowest index, so a
    /// query sharing no terms with the manual resolves to section 0 with score 0.
    ///
    /// The query must not be blank; that is checked by the caller.
    pub fn best_match(&self, query: &str) -> MatchResult {
        let mut best = MatchResult {
            index: 0,
            score: f64::NEG_INFINITY,
        };

        for (index, score) in self.scores(query).into_iter().enumerate() {
            if score > best.score {
                best = MatchResult { index, score };
            }
        }

        tracing::debug!(
            "Query {:?} matched section {} (score {:.4})",
            query,
            best.index,
            best.score
        );
        best
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    pub fn model(&self) -> &W {
        &self.model
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
