//! Runtime settings resolved from CLI flags, environment and platform defaults.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::pool::{ActivityPool, load_pool_file};
use crate::storage::PreferenceStore;
use crate::timer::DEFAULT_TIMER_MINUTES;
use crate::utils::get_data_dir;

/// Artificial delay before an interactive suggestion is shown
pub const INTERACTIVE_GENERATION_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub pool_path: Option<PathBuf>,
    pub generation_delay: Duration,
    pub timer_minutes: u64,
}

impl Settings {
    /// Resolve settings, falling back to the platform data directory
    ///
    /// `data_dir` and `pool_path` arrive already merged with their environment
    /// variables by clap.
    pub fn resolve(data_dir: Option<PathBuf>, pool_path: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => get_data_dir().context("Failed to determine data directory")?,
        };
        debug!(data_dir = %data_dir.display(), "Resolved settings");

        Ok(Self {
            data_dir,
            pool_path,
            generation_delay: Duration::ZERO,
            timer_minutes: DEFAULT_TIMER_MINUTES,
        })
    }

    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.generation_delay = delay;
        self
    }

    pub fn with_timer_minutes(mut self, minutes: u64) -> Self {
        self.timer_minutes = minutes;
        self
    }

    /// Load the activity pool: the override file if configured, otherwise built-in
    pub fn load_pool(&self) -> Result<ActivityPool> {
        match &self.pool_path {
            Some(path) => load_pool_file(path),
            None => Ok(ActivityPool::builtin()),
        }
    }

    pub fn store(&self) -> PreferenceStore {
        PreferenceStore::new(&self.data_dir)
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("activity-suggester.log")
    }
}
