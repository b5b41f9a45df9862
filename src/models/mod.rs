//! Core data types for activity suggestions.
//!
//! - [`Category`] - The fixed set of interest buckets
//! - [`HistoryEntry`] / [`History`] - Bounded record of past suggestions
//! - [`Theme`] - Named palettes cycled round-robin by the presentation layer

pub mod category;
pub mod history;
pub mod theme;

pub use category::{Category, CategoryParseError};
pub use history::{HISTORY_CAPACITY, History, HistoryEntry};
pub use theme::Theme;
