//! Error types for story-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised by the typed constructors.
///
/// Extraction itself never fails; these only surface when a caller builds a
/// [`StoryId`](crate::StoryId) or [`Priority`](crate::Priority) from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid story ID: {value}")]
    InvalidStoryId { value: String },

    #[error("invalid priority value: {value}")]
    InvalidPriority { value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_story_id() {
        let error = ParseError::InvalidStoryId {
            value: "US-A-001".to_string(),
        };
        assert_eq!(error.to_string(), "invalid story ID: US-A-001");
    }

    #[test]
    fn display_invalid_priority() {
        let error = ParseError::InvalidPriority { value: 9 };
        assert_eq!(error.to_string(), "invalid priority value: 9");
    }
}
