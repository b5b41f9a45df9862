use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Named visual theme for the terminal UI
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Ocean,
    Forest,
    Sunset,
}

impl Theme {
    /// Next theme in round-robin order, wrapping after the last
    pub fn next(self) -> Theme {
        let themes: Vec<Theme> = Theme::iter().collect();
        let idx = themes.iter().position(|t| *t == self).unwrap_or(0);
        themes[(idx + 1) % themes.len()]
    }
}
