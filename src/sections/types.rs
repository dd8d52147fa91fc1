use serde::{Deserialize, Serialize};

/// A titled, contiguous block of the manual.
///
/// `body` holds the title as its first line followed by the trimmed content
/// lines, which is also the text the similarity index is fitted on.
/// Sections that precede the first heading have an empty title, in which case
/// the body starts directly with content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// First line of the body: the title for titled sections,
    /// the first content line otherwise.
    pub fn heading(&self) -> &str {
        self.body.lines().next().unwrap_or_default()
    }

    /// Non-blank body lines following the heading line.
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.body
            .lines()
            .skip(1)
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
