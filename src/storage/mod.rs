//! Persistent preferences store
//!
//! Three independent JSON entries live in the data directory:
//! - `favorites.json`: list of favorited activity strings
//! - `categories.json`: list of selected category identifiers
//! - `theme.json`: active theme identifier
//!
//! Entries are read once at startup and rewritten on every relevant change.
//! Missing or corrupt entries read as absent.

mod persistence;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;

use crate::models::{Category, Theme};

pub use persistence::{read_entry, write_entry};

const FAVORITES_FILENAME: &str = "favorites.json";
const CATEGORIES_FILENAME: &str = "categories.json";
const THEME_FILENAME: &str = "theme.json";

/// Values restored at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub favorites: Vec<String>,
    pub categories: BTreeSet<Category>,
    pub theme: Theme,
}

/// Key-value store rooted at a data directory
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read all three entries, substituting defaults for absent ones
    pub fn load(&self) -> Preferences {
        Preferences {
            favorites: self.load_favorites(),
            categories: self.load_categories(),
            theme: self.load_theme(),
        }
    }

    pub fn load_favorites(&self) -> Vec<String> {
        let favorites: Vec<String> =
            read_entry(&self.dir.join(FAVORITES_FILENAME)).unwrap_or_default();

        // Keep first occurrence order, drop repeats left by hand edits
        let mut seen = BTreeSet::new();
        favorites.into_iter().filter(|f| seen.insert(f.clone())).collect()
    }

    pub fn load_categories(&self) -> BTreeSet<Category> {
        let raw: Vec<String> = read_entry(&self.dir.join(CATEGORIES_FILENAME)).unwrap_or_default();
        raw.iter()
            .filter_map(|id| match id.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    warn!("Ignoring stored category: {}", e);
                    None
                }
            })
            .collect()
    }

    pub fn load_theme(&self) -> Theme {
        let raw: Option<String> = read_entry(&self.dir.join(THEME_FILENAME));
        raw.and_then(|id| match id.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(_) => {
                warn!("Ignoring unknown stored theme '{}'", id);
                None
            }
        })
        .unwrap_or_default()
    }

    pub fn save_favorites(&self, favorites: &[String]) -> Result<()> {
        write_entry(&self.dir, FAVORITES_FILENAME, &favorites)
    }

    pub fn save_categories(&self, categories: &BTreeSet<Category>) -> Result<()> {
        let ids: Vec<&str> = categories.iter().map(|c| c.as_ref()).collect();
        write_entry(&self.dir, CATEGORIES_FILENAME, &ids)
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        write_entry(&self.dir, THEME_FILENAME, &theme.as_ref())
    }
}
