use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Difficulty level of a craft project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Difficulty must be 'easy', 'medium', or 'hard'")]
pub struct DifficultyParseError;

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    /// Case-insensitive, ignores surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(normalized))
            .ok_or(DifficultyParseError)
    }
}

/// A single craft project in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftItem {
    pub name: String,
    pub description: String,
    pub materials: Vec<String>,
    pub difficulty: Difficulty,
    /// Free text such as "15-20 minutes" or "1-2 hours".
    pub time_required: String,
    pub category: String,
}

/// Full record for one craft: the item plus its steps and tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CraftDetails<'a> {
    pub item: &'a CraftItem,
    pub instructions: &'a [String],
    pub tips: &'a [String],
}
