//! Similarity Search Module
//!
//! Ranks the sections of the manual against a free-text question.
//!
//! ## Overview
//! At startup every section body is tokenized and a tf-idf model is fitted
//! over the whole set. Each section becomes one L2-normalized row vector.
//! A question is projected into the same space with the fitted vocabulary
//! and compared to every row by cosine similarity; the top row wins.
//!
//! ## Submodules
//! - **`tokenizer`**: Lowercasing word tokenizer shared by fitting and querying.
//! - **`vectorizer`**: Sparse vectors, cosine similarity and the tf-idf model.
//! - **`engine`**: The `SimilarityIndex` that owns sections and their vectors.
//! - **`types`**: Match results and the confidence policy.

pub mod engine;
pub mod tokenizer;
pub mod types;
pub mod vectorizer;

pub use engine::SimilarityIndex;
pub use types::{MatchPolicy, MatchResult};
pub use vectorizer::{cosine_similarity, SparseVector, TermWeighting, TfidfModel};
