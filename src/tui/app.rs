//! TUI application state and event handling.
//!
//! The `App` owns the single live [`AppState`] and applies every update in
//! order from one loop:
//!
//! - **Generation**: Enter arms a pending suggestion that resolves after the
//!   artificial delay; further requests are ignored until it does
//! - **Countdown**: ticked once per loop iteration, one second per elapsed second
//! - **Persistence**: selection, favorites and theme are saved on every change;
//!   save failures become error notices and the session carries on
//! - **Status messages**: Transient notices that expire on their own
//! - **Dirty state tracking**: Redraw only when state changes or on a slow heartbeat

use std::time::{Duration, Instant};

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{info, warn};

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::models::Category;
use crate::pool::ActivityPool;
use crate::selector::SelectError;
use crate::share::share_to_clipboard;
use crate::state::AppState;
use crate::storage::PreferenceStore;
use crate::timer::{TimerEvent, next_preset};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which list the lower-right pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideView {
    History,
    Favorites,
}

/// Which persisted entry an update touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persist {
    Categories,
    Favorites,
    Theme,
}

pub struct App {
    state: AppState,
    pool: ActivityPool,
    store: PreferenceStore,
    rng: StdRng,
    timer_minutes: u64,
    cursor: usize,
    side_view: SideView,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(
        state: AppState,
        pool: ActivityPool,
        store: PreferenceStore,
        timer_minutes: u64,
    ) -> Self {
        Self::with_rng(state, pool, store, timer_minutes, StdRng::from_os_rng())
    }

    pub fn with_rng(
        state: AppState,
        pool: ActivityPool,
        store: PreferenceStore,
        timer_minutes: u64,
        rng: StdRng,
    ) -> Self {
        Self {
            state,
            pool,
            store,
            rng,
            timer_minutes,
            cursor: 0,
            side_view: SideView::History,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn set_success(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.process_timers(Instant::now());

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let state = RenderState {
                        state: &self.state,
                        pool: &self.pool,
                        cursor: self.cursor,
                        side_view: self.side_view,
                        timer_minutes: self.timer_minutes,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action, Instant::now());
        }

        Ok(())
    }

    /// Resolve a due generation and advance the countdown
    fn process_timers(&mut self, now: Instant) {
        if let Some(result) = self.state.poll_generation(now, &self.pool, &mut self.rng) {
            match result {
                Ok(_) => self.needs_redraw = true,
                Err(e) => self.set_error(format!("✗ {}", describe_select_error(e))),
            }
        }

        match self.state.tick_timer(now) {
            Some(TimerEvent::Finished) => {
                info!("Countdown finished");
                self.set_success("⏰ Time's up!");
            }
            Some(TimerEvent::Tick { .. }) => self.needs_redraw = true,
            None => {}
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_cursor(-1),
            Action::MoveDown => self.move_cursor(1),
            Action::ToggleCategory => {
                if let Some(category) = self.category_under_cursor() {
                    self.state.toggle_category(category);
                    self.persist(Persist::Categories);
                }
            }
            Action::SelectAll => {
                let all = Category::all().into_iter().collect();
                if self.state.set_categories(all) {
                    self.persist(Persist::Categories);
                }
            }
            Action::ClearSelection => {
                if self.state.clear_categories() {
                    self.persist(Persist::Categories);
                }
            }
            Action::Generate => self.request_generation(now),
            Action::ToggleFavorite => self.toggle_favorite(),
            Action::Share => self.share(),
            Action::StartTimer => {
                self.state.start_timer(self.timer_minutes, now);
                self.set_success(format!("⏱ Timer started for {} minutes", self.timer_minutes));
            }
            Action::StopTimer => {
                if self.state.stop_timer() {
                    self.set_success("Timer stopped");
                }
            }
            Action::CycleTimerLength => {
                self.timer_minutes = next_preset(self.timer_minutes);
                self.set_success(format!("⏱ Timer length: {} minutes", self.timer_minutes));
            }
            Action::CycleTheme => {
                let theme = self.state.cycle_theme();
                self.persist(Persist::Theme);
                info!(%theme, "Theme changed");
            }
            Action::ToggleSideView => {
                self.side_view = match self.side_view {
                    SideView::History => SideView::Favorites,
                    SideView::Favorites => SideView::History,
                };
                self.needs_redraw = true;
            }
            Action::None => {}
        }
    }

    fn category_under_cursor(&self) -> Option<Category> {
        Category::all().get(self.cursor).copied()
    }

    fn move_cursor(&mut self, delta: isize) {
        let total = Category::all().len();
        let old = self.cursor;
        let new = (self.cursor as isize + delta).max(0) as usize;
        self.cursor = new.min(total - 1);

        if old != self.cursor {
            self.needs_redraw = true;
        }
    }

    fn request_generation(&mut self, now: Instant) {
        // Reject up front so the user is told immediately, not after the delay
        if self.state.selected().is_empty() {
            self.set_error(format!("✗ {}", describe_select_error(SelectError::NoCategorySelected)));
            return;
        }
        if self.state.request_generation(now) {
            self.needs_redraw = true;
        }
    }

    fn toggle_favorite(&mut self) {
        let Some(activity) = self.state.current().map(|entry| entry.activity.clone()) else {
            self.set_error("✗ Generate an activity first");
            return;
        };

        let added = self.state.toggle_favorite(&activity);
        if self.persist(Persist::Favorites) {
            if added {
                self.set_success("★ Added to favorites");
            } else {
                self.set_success("Removed from favorites");
            }
        }
    }

    fn share(&mut self) {
        let Some(activity) = self.state.current().map(|entry| entry.activity.clone()) else {
            self.set_error("✗ Generate an activity first");
            return;
        };

        match share_to_clipboard(&activity) {
            Ok(_) => self.set_success("✓ Share message copied to clipboard"),
            Err(e) => self.set_error(format!("✗ Clipboard error: {}", e)),
        }
    }

    /// Save one entry; failures become an error notice. Returns whether it saved.
    fn persist(&mut self, what: Persist) -> bool {
        self.needs_redraw = true;
        let result = match what {
            Persist::Categories => self.store.save_categories(self.state.selected()),
            Persist::Favorites => self.store.save_favorites(self.state.favorites()),
            Persist::Theme => self.store.save_theme(self.state.theme()),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save {:?}: {:#}", what, e);
                self.set_error(format!("✗ Could not save preferences: {}", e));
                false
            }
        }
    }
}

fn describe_select_error(error: SelectError) -> &'static str {
    match error {
        SelectError::NoCategorySelected => "Select at least one category (Space)",
        SelectError::NoActivitiesAvailable => "No activities available for these categories",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use tempfile::TempDir;

    use super::*;
    use crate::models::Theme;
    use crate::storage::Preferences;

    const DELAY: Duration = Duration::from_millis(800);

    fn create_app(dir: &TempDir, categories: &[Category]) -> App {
        let preferences = Preferences {
            categories: categories.iter().copied().collect(),
            ..Preferences::default()
        };
        App::with_rng(
            AppState::new(preferences, DELAY),
            ActivityPool::builtin(),
            PreferenceStore::new(dir.path()),
            15,
            StdRng::seed_from_u64(1234),
        )
    }

    fn generate(app: &mut App) {
        let start = Instant::now();
        app.handle_action(Action::Generate, start);
        app.process_timers(start + DELAY);
    }

    #[test]
    fn test_app_new_initializes_state() {
        let dir = TempDir::new().unwrap();
        let app = create_app(&dir, &[]);

        assert_eq!(app.cursor, 0);
        assert_eq!(app.side_view, SideView::History);
        assert!(!app.should_quit);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_handle_action_quit() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.handle_action(Action::Quit, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn test_move_cursor_bounds() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.handle_action(Action::MoveUp, Instant::now());
        assert_eq!(app.cursor, 0);

        for _ in 0..20 {
            app.handle_action(Action::MoveDown, Instant::now());
        }
        assert_eq!(app.cursor, Category::all().len() - 1);
    }

    #[test]
    fn test_toggle_category_persists_selection() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.handle_action(Action::MoveDown, Instant::now());
        app.handle_action(Action::ToggleCategory, Instant::now());

        assert!(app.state.is_selected(Category::Recreational));
        let stored = PreferenceStore::new(dir.path()).load_categories();
        assert_eq!(stored, BTreeSet::from([Category::Recreational]));
    }

    #[test]
    fn test_select_all_and_clear() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.handle_action(Action::SelectAll, Instant::now());
        assert_eq!(app.state.selected().len(), Category::all().len());

        app.handle_action(Action::ClearSelection, Instant::now());
        assert!(app.state.selected().is_empty());
        assert!(PreferenceStore::new(dir.path()).load_categories().is_empty());
    }

    #[test]
    fn test_generate_without_categories_shows_error() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.handle_action(Action::Generate, Instant::now());

        assert!(!app.state.is_generating());
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.message_type, MessageType::Error);
        assert!(msg.text.contains("Select at least one category"));
    }

    #[test]
    fn test_generate_waits_for_delay_then_records() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[Category::Music]);
        let start = Instant::now();

        app.handle_action(Action::Generate, start);
        assert!(app.state.is_generating());

        app.process_timers(start + Duration::from_millis(100));
        assert!(app.state.current().is_none());

        app.process_timers(start + DELAY);
        assert!(!app.state.is_generating());
        let current = app.state.current().unwrap();
        assert!(app.pool.activities(Category::Music).contains(&current.activity));
    }

    #[test]
    fn test_second_generate_ignored_while_pending() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[Category::Music]);
        let start = Instant::now();

        app.handle_action(Action::Generate, start);
        app.handle_action(Action::Generate, start + Duration::from_millis(10));
        app.process_timers(start + DELAY + Duration::from_millis(10));

        assert_eq!(app.state.history().len(), 1);
    }

    #[test]
    fn test_empty_pool_category_reports_error_after_delay() {
        let dir = TempDir::new().unwrap();
        let preferences =
            Preferences { categories: BTreeSet::from([Category::Charity]), ..Preferences::default() };
        let mut app = App::with_rng(
            AppState::new(preferences, DELAY),
            ActivityPool::from_entries([(Category::Charity, Vec::<String>::new())]),
            PreferenceStore::new(dir.path()),
            15,
            StdRng::seed_from_u64(1),
        );

        generate(&mut app);

        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.message_type, MessageType::Error);
        assert!(msg.text.contains("No activities available"));
        assert!(!app.state.is_generating());
    }

    #[test]
    fn test_toggle_favorite_requires_result() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[Category::Music]);

        app.handle_action(Action::ToggleFavorite, Instant::now());

        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.text, "✗ Generate an activity first");
        assert!(app.state.favorites().is_empty());
    }

    #[test]
    fn test_toggle_favorite_persists() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[Category::Music]);
        generate(&mut app);
        let activity = app.state.current().unwrap().activity.clone();

        app.handle_action(Action::ToggleFavorite, Instant::now());
        assert!(app.state.is_favorite(&activity));
        assert_eq!(app.status_message.as_ref().unwrap().text, "★ Added to favorites");
        assert_eq!(PreferenceStore::new(dir.path()).load_favorites(), vec![activity.clone()]);

        app.handle_action(Action::ToggleFavorite, Instant::now());
        assert!(!app.state.is_favorite(&activity));
        assert!(PreferenceStore::new(dir.path()).load_favorites().is_empty());
    }

    #[test]
    fn test_persist_failure_is_non_fatal() {
        let dir = TempDir::new().unwrap();
        // A regular file where the data directory should be makes every save fail
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "").unwrap();
        let mut app = App::with_rng(
            AppState::new(Preferences::default(), DELAY),
            ActivityPool::builtin(),
            PreferenceStore::new(blocked.join("data")),
            15,
            StdRng::seed_from_u64(1),
        );

        app.handle_action(Action::CycleTheme, Instant::now());

        assert_eq!(app.state.theme(), Theme::Dark);
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.message_type, MessageType::Error);
        assert!(msg.text.starts_with("✗ Could not save preferences"));
    }

    #[test]
    fn test_cycle_theme_persists() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.handle_action(Action::CycleTheme, Instant::now());
        app.handle_action(Action::CycleTheme, Instant::now());

        assert_eq!(app.state.theme(), Theme::Ocean);
        assert_eq!(PreferenceStore::new(dir.path()).load_theme(), Theme::Ocean);
    }

    #[test]
    fn test_timer_start_tick_finish() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);
        app.timer_minutes = 1;
        let start = Instant::now();

        app.handle_action(Action::StartTimer, start);
        assert_eq!(app.state.timer().unwrap().remaining_secs(), 60);

        app.process_timers(start + Duration::from_secs(1));
        assert_eq!(app.state.timer().unwrap().remaining_secs(), 59);

        app.process_timers(start + Duration::from_secs(60));
        assert!(app.state.timer().unwrap().is_finished());
        assert_eq!(app.status_message.as_ref().unwrap().text, "⏰ Time's up!");
    }

    #[test]
    fn test_cycle_timer_length_through_presets() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);
        assert_eq!(app.timer_minutes, 15);

        app.handle_action(Action::CycleTimerLength, Instant::now());
        assert_eq!(app.timer_minutes, 30);
        assert_eq!(app.status_message.as_ref().unwrap().text, "⏱ Timer length: 30 minutes");

        app.handle_action(Action::CycleTimerLength, Instant::now());
        app.handle_action(Action::CycleTimerLength, Instant::now());
        assert_eq!(app.timer_minutes, 5);

        let start = Instant::now();
        app.handle_action(Action::StartTimer, start);
        assert_eq!(app.state.timer().unwrap().total_secs(), 300);
    }

    #[test]
    fn test_stop_timer() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.handle_action(Action::StopTimer, Instant::now());
        assert!(app.status_message.is_none());

        app.handle_action(Action::StartTimer, Instant::now());
        app.handle_action(Action::StopTimer, Instant::now());
        assert!(app.state.timer().is_none());
        assert_eq!(app.status_message.as_ref().unwrap().text, "Timer stopped");
    }

    #[test]
    fn test_share_requires_result() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.handle_action(Action::Share, Instant::now());
        assert_eq!(app.status_message.as_ref().unwrap().text, "✗ Generate an activity first");
    }

    #[test]
    fn test_share_reports_outcome() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[Category::Music]);
        generate(&mut app);

        app.handle_action(Action::Share, Instant::now());

        // Clipboard may be unavailable in the test environment
        let msg = app.status_message.as_ref().unwrap();
        if msg.message_type == MessageType::Success {
            assert_eq!(msg.text, "✓ Share message copied to clipboard");
        } else {
            assert!(msg.text.starts_with("✗ Clipboard error:"));
        }
    }

    #[test]
    fn test_toggle_side_view() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.handle_action(Action::ToggleSideView, Instant::now());
        assert_eq!(app.side_view, SideView::Favorites);
        app.handle_action(Action::ToggleSideView, Instant::now());
        assert_eq!(app.side_view, SideView::History);
    }

    #[test]
    fn test_check_and_clear_expired_status() {
        let dir = TempDir::new().unwrap();
        let mut app = create_app(&dir, &[]);

        app.set_status("Expired", MessageType::Success, 0);
        std::thread::sleep(Duration::from_millis(1));
        app.check_and_clear_expired_status();
        assert!(app.status_message.is_none());

        app.set_status("Active", MessageType::Success, 10000);
        app.check_and_clear_expired_status();
        assert_eq!(app.status_message.as_ref().unwrap().text, "Active");
    }
}
