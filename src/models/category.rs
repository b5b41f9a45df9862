use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

/// Interest bucket grouping related activities
///
/// Declaration order is the order candidates are concatenated in during selection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid category '{input}' (expected one of: {expected})")]
pub struct CategoryParseError {
    pub input: String,
    pub expected: String,
}

impl Category {
    /// All categories in declaration order
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Recreational => "Recreational",
            Category::Social => "Social",
            Category::Diy => "DIY",
            Category::Charity => "Charity",
            Category::Cooking => "Cooking",
            Category::Relaxation => "Relaxation",
            Category::Music => "Music",
            Category::Busywork => "Busywork",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Education => "📚",
            Category::Recreational => "🎲",
            Category::Social => "👥",
            Category::Diy => "🔨",
            Category::Charity => "💝",
            Category::Cooking => "🍳",
            Category::Relaxation => "🧘",
            Category::Music => "🎵",
            Category::Busywork => "🧹",
        }
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::iter().find(|c| c.as_ref().eq_ignore_ascii_case(trimmed)).ok_or_else(|| {
            CategoryParseError {
                input: trimmed.to_string(),
                expected: Category::iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", "),
            }
        })
    }
}
