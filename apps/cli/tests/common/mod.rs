//! Shared fixtures for CLI integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Generate a story document with `num_stories` stories.
///
/// Priorities cycle through Urgent, High, Medium, Low.
pub fn sample_story_content(num_stories: usize) -> String {
    const LABELS: [&str; 4] = ["Urgent", "High", "Medium", "Low"];

    (0..num_stories)
        .map(|i| {
            format!(
                "#### US-AI-{:03}: Story {}\n**As a user, I want feature {}**\n**Priority:** {}\n**Phase:** 1\n---\n",
                i + 1,
                i + 1,
                i + 1,
                LABELS[i % LABELS.len()]
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `content` to a markdown file inside a fresh temp directory.
///
/// Keep the returned TempDir alive for as long as the file is needed.
pub fn write_markdown(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("user-stories.md");
    std::fs::write(&path, content).expect("Failed to write fixture");
    (dir, path)
}
