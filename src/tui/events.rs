use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ToggleCategory,
    SelectAll,
    ClearSelection,
    Generate,
    ToggleFavorite,
    Share,
    StartTimer,
    StopTimer,
    CycleTimerLength,
    CycleTheme,
    ToggleSideView,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => Action::Quit,

        // Category navigation (arrows, Vim and Emacs style)
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,

        // Selection
        (KeyCode::Char(' '), _) => Action::ToggleCategory,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::SelectAll,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::ClearSelection,

        // Suggestion actions
        (KeyCode::Enter, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => Action::Generate,
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::ToggleFavorite,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::Share,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::Share,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::StartTimer,
        (KeyCode::Char('x'), KeyModifiers::NONE) => Action::StopTimer,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::CycleTimerLength,

        // View
        (KeyCode::Char('T'), _) => Action::CycleTheme,
        (KeyCode::Tab, _) => Action::ToggleSideView,

        _ => Action::None,
    }
}
