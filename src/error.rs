//! Error Types
//!
//! Failures that can occur while loading the manual and building the index.
//! All of them are fatal at startup: the service never becomes ready without
//! a non-empty, indexable corpus.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    /// The manual could not be opened or is not valid UTF-8.
    #[error("failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manual was readable but yielded no sections.
    #[error("document {0} contains no sections")]
    EmptyDocument(PathBuf),

    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,

    /// Every section was made of punctuation or single-character words.
    #[error("empty vocabulary: the corpus contains no indexable terms")]
    EmptyVocabulary,
}
