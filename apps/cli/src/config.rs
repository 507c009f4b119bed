//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Environment variable naming the default input document.
pub const SOURCE_ENV: &str = "STORY_SOURCE";

/// Input document used when neither an argument nor `STORY_SOURCE` is given.
pub const DEFAULT_SOURCE: &str = "docs/user-stories.md";

/// Extract user stories from a markdown document as JSON.
#[derive(Debug, Parser)]
#[command(name = "story-extract")]
#[command(about = "Extract #### US-XX-NNN user stories from markdown as JSON")]
#[command(version)]
pub struct Config {
    /// Markdown file to read
    #[arg(env = SOURCE_ENV, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log how many stories were found per priority
    #[arg(long)]
    pub summary: bool,
}
