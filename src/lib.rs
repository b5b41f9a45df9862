//! Activity Suggester - Random leisure activities from the categories you like
//!
//! This library provides the pieces behind the `activity-suggester` CLI and
//! terminal UI:
//!
//! - A static [`ActivityPool`] mapping each [`Category`] to activity strings
//! - [`select_activity`], which samples the union of the selected categories and
//!   avoids repeating the most recent suggestion when it can
//! - [`AppState`], the explicit state (selection, history, favorites, timer, theme)
//!   updated by the presentation layer
//! - A [`PreferenceStore`] persisting favorites, selected categories and theme
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use activity_suggester::{ActivityPool, Category, History, select_activity};
//!
//! let pool = ActivityPool::builtin();
//! let selected = BTreeSet::from([Category::Cooking]);
//! let activity = select_activity(&selected, &History::new(), &pool, &mut rand::rng())?;
//! assert!(pool.activities(Category::Cooking).contains(&activity));
//! # Ok::<(), activity_suggester::SelectError>(())
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod pool;
pub mod selector;
pub mod share;
pub mod state;
pub mod storage;
pub mod timer;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use models::{Category, History, HistoryEntry, Theme};
pub use pool::ActivityPool;
pub use selector::{MAX_SELECTION_ATTEMPTS, SelectError, select_activity};
pub use share::{copy_to_clipboard, share_message};
pub use state::AppState;
pub use storage::{PreferenceStore, Preferences};
pub use utils::format_path_with_tilde;
