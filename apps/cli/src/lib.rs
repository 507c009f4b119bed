pub mod config;
pub mod output;

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use story_core::StoryRecord;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::Config;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout is reserved for the JSON document
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();
    execute(&config)
}

/// Read, extract and emit according to `config`.
pub fn execute(config: &Config) -> anyhow::Result<()> {
    let records = load_stories(&config.source)?;

    if config.summary {
        output::log_summary(&records);
    }

    let json = output::to_json(&records, config.pretty)?;
    output::write(&json, config.output.as_deref())?;

    if let Some(path) = &config.output {
        tracing::info!("Wrote {} stories to {}", records.len(), path.display());
    }

    Ok(())
}

/// Read a markdown file and extract its stories.
pub fn load_stories(path: &Path) -> anyhow::Result<Vec<StoryRecord>> {
    tracing::debug!("Reading {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let records = story_core::extract(&content);
    tracing::info!("Extracted {} stories from {}", records.len(), path.display());

    Ok(records)
}
