//! Auth form keys. Every printable key is text, so only `Esc` falls through.

use crate::tui::app_states::AuthState;
use crate::tui::traits::EventResult;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_auth_key(state: &mut AuthState, key: KeyEvent) -> EventResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('t') if ctrl => state.toggle_mode(),
        KeyCode::Char('p') if ctrl => state.toggle_show_password(),
        KeyCode::Tab | KeyCode::Down => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.focus_prev(),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Enter => return EventResult::navigate(state.submit()),
        KeyCode::Char(c) if !ctrl => state.input(c),
        KeyCode::Esc => return EventResult::Ignored,
        _ => {}
    }
    EventResult::Consumed
}
