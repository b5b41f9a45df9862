//! The immutable category-to-activities mapping.
//!
//! A pool is built once at startup, either from the built-in defaults or from a
//! JSON override file, and is only read afterwards.

mod defaults;
pub mod loader;

use std::collections::BTreeMap;

use crate::models::Category;

pub use loader::load_pool_file;

/// Static mapping from [`Category`] to its ordered activities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityPool {
    activities: BTreeMap<Category, Vec<String>>,
}

impl ActivityPool {
    /// Build a pool from explicit category entries
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<S>)>,
        S: Into<String>,
    {
        let activities = entries
            .into_iter()
            .map(|(category, items)| (category, items.into_iter().map(Into::into).collect()))
            .collect();
        Self { activities }
    }

    /// The pool shipped with the binary, covering every category
    pub fn builtin() -> Self {
        Self::from_entries(
            defaults::BUILTIN_ACTIVITIES
                .iter()
                .map(|(category, items)| (*category, items.to_vec())),
        )
    }

    /// Activities for a category (empty slice when absent)
    pub fn activities(&self, category: Category) -> &[String] {
        self.activities.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, category: Category) -> bool {
        self.activities.contains_key(&category)
    }

    /// Total number of activities across all categories
    pub fn total(&self) -> usize {
        self.activities.values().map(Vec::len).sum()
    }
}
