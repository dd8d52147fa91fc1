//! Term Weighting
//!
//! Turns text into sparse term-weight vectors. The index only depends on the
//! `TermWeighting` seam; `TfidfModel` is the default implementation.

use super::tokenizer::tokenize;
use crate::error::QaError;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A sparse vector stored as `(column, weight)` pairs sorted by column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn from_weights(weights: BTreeMap<usize, f64>) -> Self {
        Self {
            entries: weights.into_iter().collect(),
        }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < self.entries.len() && j < other.entries.len() {
            let (col_a, w_a) = self.entries[i];
            let (col_b, w_b) = other.entries[j];
            match col_a.cmp(&col_b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += w_a * w_b;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    /// Scales the vector to unit length. Zero vectors are left untouched.
    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }
}

/// Cosine of the angle between two vectors; `0.0` if either is a zero vector.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    a.dot(b) / (norm_a * norm_b)
}

/// A vector-space transform fitted once over a corpus.
pub trait TermWeighting: Sized {
    /// Learns the vocabulary and weights from the corpus.
    fn fit(corpus: &[&str]) -> Result<Self, QaError>;

    /// Projects text into the fitted space. Terms outside the vocabulary are ignored.
    fn transform(&self, text: &str) -> SparseVector;
}

/// Term frequency × smoothed inverse document frequency, L2-normalized.
///
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, where `n` is the number of
/// documents and `df(t)` the number of documents containing `t`.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&col| self.idf[col])
    }
}

impl TermWeighting for TfidfModel {
    fn fit(corpus: &[&str]) -> Result<Self, QaError> {
        if corpus.is_empty() {
            return Err(QaError::EmptyCorpus);
        }

        let documents: Vec<BTreeSet<String>> = corpus
            .iter()
            .map(|doc| tokenize(doc).into_iter().collect())
            .collect();

        // Sorted terms give stable column ids across rebuilds.
        let terms: BTreeSet<&String> = documents.iter().flatten().collect();
        if terms.is_empty() {
            return Err(QaError::EmptyVocabulary);
        }

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for doc in &documents {
            for term in doc {
                doc_freq[vocabulary[term]] += 1;
            }
        }

        let n = corpus.len() as f64;
        let idf = doc_freq
            .into_iter()
            .map(|df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Ok(Self { vocabulary, idf })
    }

    fn transform(&self, text: &str) -> SparseVector {
        let mut weights: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&col) = self.vocabulary.get(&token) {
                *weights.entry(col).or_insert(0.0) += 1.0;
            }
        }

        for (col, weight) in weights.iter_mut() {
            *weight *= self.idf[*col];
        }

        SparseVector::from_weights(weights).normalized()
    }
}
