use super::types::Section;
use crate::error::QaError;
use std::path::Path;

/// Marker that opens a new section. The rest of the line is the title.
pub const HEADING_PREFIX: &str = "### ";

/// Accumulates lines for the section currently being parsed.
#[derive(Default)]
struct SectionBuilder {
    title: String,
    lines: Vec<String>,
}

impl SectionBuilder {
    fn titled(title: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            lines: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.lines.push(line.trim().to_string());
    }

    /// Closes the section. Returns `None` when nothing but whitespace was collected.
    fn finish(self) -> Option<Section> {
        let mut body = self.title.clone();
        for line in &self.lines {
            body.push('\n');
            body.push_str(line);
        }

        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        Some(Section::new(self.title, body))
    }
}

/// Splits manual text into sections in document order.
///
/// Content before the first heading becomes an untitled section; a document
/// without any heading therefore yields exactly one section. Parsing never
/// fails: malformed headings are simply treated as body text.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = SectionBuilder::default();

    for line in text.lines() {
        match line.strip_prefix(HEADING_PREFIX) {
            Some(title) => {
                let finished = std::mem::replace(&mut current, SectionBuilder::titled(title));
                sections.extend(finished.finish());
            }
            None => current.push_line(line),
        }
    }
    sections.extend(current.finish());

    tracing::debug!("Parsed {} sections", sections.len());
    sections
}

/// Reads a UTF-8 manual from disk and parses it.
///
/// # Errors
/// * `QaError::Read` if the file is missing, unreadable or not UTF-8.
/// * `QaError::EmptyDocument` if the file contains no sections at all.
pub fn read_sections(path: &Path) -> Result<Vec<Section>, QaError> {
    let text = std::fs::read_to_string(path).map_err(|source| QaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let sections = parse_sections(&text);
    if sections.is_empty() {
        return Err(QaError::EmptyDocument(path.to_path_buf()));
    }

    tracing::info!("Loaded {} sections from {}", sections.len(), path.display());
    Ok(sections)
}
