//! Core library for extracting user stories from markdown documents.
//!
//! Provides:
//! - Story block segmentation on `#### US-XX-NNN:` headings
//! - Description and priority extraction with ordered fallback rules
//! - Shared types (StoryRecord, StoryId, Priority)

pub mod error;
pub mod parser;
pub mod rules;
pub mod types;

pub use error::{ParseError, Result};
pub use parser::{extract, split_blocks, StoryBlock};
pub use rules::{extract_description, extract_priority, find_priority_label};
pub use types::{Priority, StoryId, StoryRecord};
