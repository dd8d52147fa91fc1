use regex::Regex;
use std::sync::LazyLock;

/// Runs of two or more Unicode word characters.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Lowercases `text` and splits it into word tokens, in order and with duplicates.
///
/// Single-character words and punctuation are dropped; digits count as word
/// characters, so `"Windows 11"` yields `["windows", "11"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}
