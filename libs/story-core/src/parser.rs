//! Markdown parser for user story documents.
//!
//! # Format
//! ```markdown
//! #### US-AI-001: Patient Intake Automation
//! **As a clinician, I want automated intake so that...**
//! **Priority:** High
//! **Phase:** 1
//! ---
//! #### US-AI-002: Session Notes Sync
//! Some plain description without bold markers.
//! Priority: Low
//! ```
//!
//! Headings that do not match `#### US-XX-NNN:` exactly are not story
//! boundaries; their text stays inside the preceding block.

use crate::rules::{extract_description, extract_priority};
use crate::types::{StoryId, StoryRecord};
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#### (?P<id>US-[A-Z]{2}-[0-9]{3}):").expect("heading pattern is valid")
});

/// One story's slice of the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryBlock<'a> {
    pub id: &'a str,
    /// Rest of the heading line after the colon, untrimmed.
    pub title_line: &'a str,
    /// Everything after the heading line up to the next heading.
    pub body: &'a str,
}

impl<'a> StoryBlock<'a> {
    fn new(id: &'a str, content: &'a str) -> Self {
        let (title_line, body) = content.split_once('\n').unwrap_or((content, ""));
        Self {
            id,
            title_line,
            body,
        }
    }

    /// Build the record for this block.
    pub fn to_record(&self) -> Option<StoryRecord> {
        let id: StoryId = self.id.parse().ok()?;
        Some(StoryRecord::new(
            id,
            self.title_line,
            extract_description(self.body),
            extract_priority(self.body),
        ))
    }
}

/// Split content into story blocks in document order.
///
/// Text before the first heading is discarded.
pub fn split_blocks(content: &str) -> Vec<StoryBlock<'_>> {
    let headings: Vec<_> = HEADING
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let id = caps.name("id")?;
            Some((whole.start(), whole.end(), id.as_str()))
        })
        .collect();

    headings
        .iter()
        .enumerate()
        .map(|(idx, &(_, content_start, id))| {
            let content_end = headings
                .get(idx + 1)
                .map(|&(next_start, _, _)| next_start)
                .unwrap_or(content.len());
            StoryBlock::new(id, &content[content_start..content_end])
        })
        .collect()
}

/// Extract every user story from markdown content.
pub fn extract(content: &str) -> Vec<StoryRecord> {
    split_blocks(content)
        .iter()
        .filter_map(StoryBlock::to_record)
        .collect()
}
