//! Field extraction cascades for a story body.
//!
//! Each field has an ordered list of rules; the first rule that produces a
//! value wins.

use crate::types::Priority;
use regex::Regex;
use std::sync::LazyLock;

/// Literals that end the bold description span. Earliest occurrence wins.
const SPAN_TERMINATORS: [&str; 3] = ["**Phase:**", "**Priority:**", "---"];

const BOLD: &str = "**";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DescriptionRule {
    /// From the first `**` up to the first terminator or end of body.
    BoldSpan,
    /// Entire body.
    WholeBody,
}

const DESCRIPTION_RULES: [DescriptionRule; 2] =
    [DescriptionRule::BoldSpan, DescriptionRule::WholeBody];

impl DescriptionRule {
    fn apply(self, body: &str) -> Option<String> {
        match self {
            Self::BoldSpan => {
                let start = body.find(BOLD)? + BOLD.len();
                let rest = &body[start..];
                let end = SPAN_TERMINATORS
                    .iter()
                    .filter_map(|terminator| rest.find(terminator))
                    .min()
                    .unwrap_or(rest.len());
                Some(format!("{}{}", BOLD, rest[..end].trim()))
            }
            Self::WholeBody => Some(body.trim().to_string()),
        }
    }
}

// Tried in order: exact label, bold marker to end of line, plain marker to
// end of line. `.` never crosses a newline.
const PRIORITY_PATTERNS: [&str; 3] = [
    r"\*\*Priority:\*\*\s*(?P<label>Low|Medium|High)",
    r"\*\*Priority:\*\*(?P<label>.+)",
    r"Priority:(?P<label>.+)",
];

static PRIORITY_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PRIORITY_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("priority pattern is valid"))
        .collect()
});

/// Derive the description of a story body.
pub fn extract_description(body: &str) -> String {
    DESCRIPTION_RULES
        .iter()
        .find_map(|rule| rule.apply(body))
        .unwrap_or_default()
}

/// Find the raw priority label in a story body, if any rule matches.
pub fn find_priority_label(body: &str) -> Option<&str> {
    PRIORITY_RULES.iter().find_map(|rule| {
        rule.captures(body)
            .and_then(|caps| caps.name("label"))
            .map(|label| label.as_str().trim())
    })
}

/// Derive the priority of a story body. Missing or unknown labels are Medium.
pub fn extract_priority(body: &str) -> Priority {
    find_priority_label(body)
        .map(Priority::from_label)
        .unwrap_or_default()
}
