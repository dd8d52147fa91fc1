//! Section Parser Module
//!
//! Splits the flat manual text into an ordered sequence of titled sections,
//! the unit of retrieval for the rest of the system.
//!
//! ## Format
//! A line starting with `### ` opens a new section and carries its title.
//! Every other line is body content of the section currently being built.
//! Nothing else is recognised as markup.
//!
//! ## Submodules
//! - **`parser`**: Line-oriented parsing and document loading.
//! - **`types`**: The `Section` data type.

pub mod parser;
pub mod types;

pub use parser::{parse_sections, read_sections, HEADING_PREFIX};
pub use types::Section;
