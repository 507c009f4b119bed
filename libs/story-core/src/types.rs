//! Core types for story extraction.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Story identifier of the form `US-XX-NNN`.
///
/// Two ASCII uppercase letters and exactly three ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StoryId(String);

impl StoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 9
            && value.starts_with("US-")
            && bytes[3..5].iter().all(u8::is_ascii_uppercase)
            && bytes[5] == b'-'
            && bytes[6..9].iter().all(u8::is_ascii_digit)
    }
}

impl FromStr for StoryId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseError::InvalidStoryId {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<String> for StoryId {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::InvalidStoryId { value })
        }
    }
}

impl From<StoryId> for String {
    fn from(id: StoryId) -> Self {
        id.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Story urgency. Serialized as its numeric rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Convert to numeric rank (1 = most urgent, 4 = least).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Urgent => 1,
            Self::High => 2,
            Self::Medium => 3,
            Self::Low => 4,
        }
    }

    /// Create from numeric rank.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Urgent),
            2 => Some(Self::High),
            3 => Some(Self::Medium),
            4 => Some(Self::Low),
            _ => None,
        }
    }

    /// Map a textual label. Matching is exact and case-sensitive;
    /// unrecognized labels fall back to Medium.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Urgent" => Self::Urgent,
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            _ => Self::Medium,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(ParseError::InvalidPriority { value })
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.to_value()
    }
}

/// A user story extracted from markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: StoryId,
    /// `[<id>] <first line>`
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl StoryRecord {
    /// Build a record, composing the display title from the id and the
    /// heading's first line.
    pub fn new(id: StoryId, first_line: &str, description: String, priority: Priority) -> Self {
        let title = format!("[{}] {}", id, first_line.trim());
        Self {
            id,
            title,
            description,
            priority,
        }
    }
}
