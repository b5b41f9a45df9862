//! Explicit application state and its update functions.
//!
//! The presentation layer owns the single live [`AppState`] and applies updates
//! sequentially. Methods that change persisted values (selection, favorites,
//! theme) report whether anything changed so the caller knows when to save.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::models::{Category, History, HistoryEntry, Theme};
use crate::pool::ActivityPool;
use crate::selector::{SelectError, select_activity};
use crate::storage::Preferences;
use crate::timer::{Countdown, TimerEvent};

#[derive(Debug, Clone)]
pub struct AppState {
    selected: BTreeSet<Category>,
    history: History,
    favorites: Vec<String>,
    theme: Theme,
    timer: Option<Countdown>,
    pending_until: Option<Instant>,
    generation_delay: Duration,
}

impl AppState {
    pub fn new(preferences: Preferences, generation_delay: Duration) -> Self {
        Self {
            selected: preferences.categories,
            history: History::new(),
            favorites: preferences.favorites,
            theme: preferences.theme,
            timer: None,
            pending_until: None,
            generation_delay,
        }
    }

    // --- Selection ---

    pub fn selected(&self) -> &BTreeSet<Category> {
        &self.selected
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    /// Flip membership of `category`; returns whether it is now selected
    pub fn toggle_category(&mut self, category: Category) -> bool {
        if self.selected.remove(&category) {
            false
        } else {
            self.selected.insert(category);
            true
        }
    }

    /// Add `category`; returns `false` if it was already selected
    pub fn select_category(&mut self, category: Category) -> bool {
        self.selected.insert(category)
    }

    /// Remove `category`; returns `false` if it was not selected
    pub fn deselect_category(&mut self, category: Category) -> bool {
        self.selected.remove(&category)
    }

    /// Replace the selection wholesale; returns whether it changed
    pub fn set_categories(&mut self, categories: BTreeSet<Category>) -> bool {
        if self.selected == categories {
            return false;
        }
        self.selected = categories;
        true
    }

    pub fn clear_categories(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    // --- Generation ---

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The most recent suggestion
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.history.latest()
    }

    pub fn is_generating(&self) -> bool {
        self.pending_until.is_some()
    }

    /// Arm a generation that completes after the artificial delay
    ///
    /// Returns `false` without changing anything if one is already pending.
    pub fn request_generation(&mut self, now: Instant) -> bool {
        if self.pending_until.is_some() {
            debug!("Ignoring generation request while one is pending");
            return false;
        }
        self.pending_until = Some(now + self.generation_delay);
        true
    }

    /// Complete the pending generation once its delay has elapsed
    ///
    /// Returns `None` while nothing is due. The pending flag is cleared whether
    /// selection succeeds or fails.
    pub fn poll_generation<R: Rng>(
        &mut self,
        now: Instant,
        pool: &ActivityPool,
        rng: &mut R,
    ) -> Option<Result<String, SelectError>> {
        let due = self.pending_until.is_some_and(|ready_at| now >= ready_at);
        if !due {
            return None;
        }
        self.pending_until = None;
        Some(self.generate_now(pool, rng))
    }

    /// Run the selector immediately and record a successful result in history
    pub fn generate_now<R: Rng>(
        &mut self,
        pool: &ActivityPool,
        rng: &mut R,
    ) -> Result<String, SelectError> {
        let activity = select_activity(&self.selected, &self.history, pool, rng)?;
        info!(activity = %activity, "Suggested activity");
        self.history.push(HistoryEntry::new(activity.clone(), self.selected.clone()));
        Ok(activity)
    }

    // --- Favorites ---

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, activity: &str) -> bool {
        self.favorites.iter().any(|f| f == activity)
    }

    /// Add `activity` to favorites; returns `false` if it already was one
    pub fn add_favorite(&mut self, activity: &str) -> bool {
        if self.is_favorite(activity) {
            return false;
        }
        self.favorites.push(activity.to_string());
        true
    }

    /// Remove `activity` from favorites; returns `false` if it was not one
    pub fn remove_favorite(&mut self, activity: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| f != activity);
        self.favorites.len() != before
    }

    /// Flip favorite status; returns whether `activity` is now a favorite
    pub fn toggle_favorite(&mut self, activity: &str) -> bool {
        if self.remove_favorite(activity) {
            false
        } else {
            self.favorites.push(activity.to_string());
            true
        }
    }

    // --- Theme ---

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Advance to the next theme in round-robin order and return it
    pub fn cycle_theme(&mut self) -> Theme {
        self.theme = self.theme.next();
        self.theme
    }

    // --- Timer ---

    pub fn timer(&self) -> Option<&Countdown> {
        self.timer.as_ref()
    }

    /// Start a countdown, replacing any running one
    pub fn start_timer(&mut self, minutes: u64, now: Instant) {
        debug!(minutes, "Starting countdown");
        self.timer = Some(Countdown::from_minutes(minutes, now));
    }

    pub fn stop_timer(&mut self) -> bool {
        self.timer.take().is_some()
    }

    pub fn tick_timer(&mut self, now: Instant) -> Option<TimerEvent> {
        self.timer.as_mut().and_then(|timer| timer.tick(now))
    }

    /// Snapshot of the values that are persisted
    pub fn preferences(&self) -> Preferences {
        Preferences {
            favorites: self.favorites.clone(),
            categories: self.selected.clone(),
            theme: self.theme,
        }
    }
}
