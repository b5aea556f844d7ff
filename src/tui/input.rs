//! Input handling for the dashboard application.
//!
//! This module provides key-to-message mapping for translating terminal
//! key events into application messages.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Some(AppMsg::FocusNext),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Some(AppMsg::FocusPrevious),
        KeyCode::Char('l' | '+') | KeyCode::Right => Some(AppMsg::Increase),
        KeyCode::Char('h' | '-') | KeyCode::Left => Some(AppMsg::Decrease),
        KeyCode::Char('r') => Some(AppMsg::ResetFilters),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
