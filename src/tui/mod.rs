// TUI module: the interactive presentation layer
mod app;
mod events;
mod layout;
mod palette;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
use tracing::info;

use crate::config::Settings;
use crate::state::AppState;
use terminal::TerminalManager;

/// Run the interactive TUI
pub fn run_interactive(settings: &Settings) -> Result<()> {
    let pool = settings.load_pool()?;
    let store = settings.store();
    let state = AppState::new(store.load(), settings.generation_delay);
    info!(categories = state.selected().len(), "Starting interactive session");

    let mut app = App::new(state, pool, store, settings.timer_minutes);

    let mut manager = TerminalManager::new()?;
    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    res
}
