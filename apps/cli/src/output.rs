//! JSON rendering and output.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use story_core::{Priority, StoryRecord};

/// Serialize records as a JSON array.
pub fn to_json(records: &[StoryRecord], pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    json.context("Failed to serialize stories")
}

/// Write JSON to `path`, or to stdout when no path is given.
pub fn write(json: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write to stdout")
        }
    }
}

/// Count stories per priority, most urgent first.
pub fn priority_counts(records: &[StoryRecord]) -> BTreeMap<Priority, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.priority).or_insert(0) += 1;
    }
    counts
}

pub fn log_summary(records: &[StoryRecord]) {
    for (priority, count) in priority_counts(records) {
        tracing::info!(
            priority = priority.label(),
            value = priority.to_value(),
            count,
            "Stories by priority"
        );
    }
}
