use std::collections::{BTreeSet, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Maximum number of suggestions kept in history
pub const HISTORY_CAPACITY: usize = 10;

/// A past suggestion, with the categories that were selected when it was made
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub activity: String,
    pub timestamp: DateTime<Utc>,
    pub categories: BTreeSet<Category>,
}

impl HistoryEntry {
    pub fn new(activity: impl Into<String>, categories: BTreeSet<Category>) -> Self {
        Self { activity: activity.into(), timestamp: Utc::now(), categories }
    }
}

/// Rolling suggestion history, newest first, capped at [`HISTORY_CAPACITY`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a suggestion at index 0, evicting the oldest entry on overflow
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Most recent entry, if any
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn get(&self, idx: usize) -> Option<&HistoryEntry> {
        self.entries.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(activity: &str) -> HistoryEntry {
        HistoryEntry::new(activity, BTreeSet::from([Category::Education]))
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_push_places_newest_first() {
        let mut history = History::new();
        history.push(entry("first"));
        history.push(entry("second"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().activity, "second");
        assert_eq!(history.get(1).unwrap().activity, "first");
    }

    #[test]
    fn test_eleventh_push_evicts_oldest() {
        let mut history = History::new();
        for i in 0..11 {
            history.push(entry(&format!("activity {}", i)));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.latest().unwrap().activity, "activity 10");
        assert_eq!(history.get(9).unwrap().activity, "activity 1");
        assert!(history.iter().all(|e| e.activity != "activity 0"));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(entry("x"));
        history.clear();
        assert!(history.is_empty());
    }
}
