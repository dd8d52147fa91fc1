use crate::sections::Section;
use std::fmt::Write;

const CLOSING: &str = "💡 **Let me know if you need any further help!**";

/// Builds the answer text for `section` in response to `query`.
///
/// The section's first body line becomes the bold heading and every following
/// non-blank line becomes a numbered step.
pub fn format_answer(section: &Section, query: &str) -> String {
    let mut response = format!("**{}**\n\n", section.heading());
    let _ = write!(
        response,
        "To {}, follow these steps:\n\n",
        query.to_lowercase()
    );

    for (i, step) in section.steps().enumerate() {
        let _ = writeln!(response, "{}. **{}**", i + 1, step);
    }

    response.push('\n');
    response.push_str(CLOSING);
    response
}

/// Answer returned when no section is a confident match for `query`.
pub fn format_no_match(query: &str) -> String {
    format!(
        "I could not find a section of the manual about \"{}\". \
         Try rephrasing the question with the words used in the manual.\n\n{}",
        query.trim(),
        CLOSING
    )
}
