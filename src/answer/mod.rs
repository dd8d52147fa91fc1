//! Answer Formatting Module
//!
//! Renders a matched section as a numbered, Markdown-flavoured instruction
//! list addressed to the user's question.

pub mod formatter;

pub use formatter::{format_answer, format_no_match};
