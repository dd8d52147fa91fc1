//! Manual Assistant Library
//!
//! Answers free-text questions by retrieving the most relevant section of a
//! reference manual and rendering it as numbered instructions. The binary
//! (`main.rs`) loads the manual once, builds the index and serves it over HTTP.
//!
//! ## Modules
//! - **`sections`**: Splits the manual into titled sections on `### ` headings.
//! - **`search`**: Tokenizer, tf-idf vector space and the top-1 `SimilarityIndex`.
//! - **`answer`**: Formats a matched section as a step-by-step answer.
//! - **`api`**: Axum handlers for `/ask` and `/health`.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: Startup error type.

pub mod answer;
pub mod api;
pub mod config;
pub mod error;
pub mod search;
pub mod sections;
