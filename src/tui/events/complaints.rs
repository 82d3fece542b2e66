//! Complaint list and form keys.
//!
//! While the form is open it takes every key, so letters never reach the
//! global handler.

use crate::tui::app_states::ComplaintsState;
use crate::tui::state::ListNavigation;
use crate::tui::traits::EventResult;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_complaints_key(state: &mut ComplaintsState, key: KeyEvent) -> EventResult {
    if state.is_form_open() {
        return handle_form_key(state, key);
    }

    match key.code {
        KeyCode::Char('n') => state.open_form(),
        KeyCode::Up | KeyCode::Char('k') => state.list.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.list.select_next(),
        _ => return EventResult::Ignored,
    }
    EventResult::Consumed
}

fn handle_form_key(state: &mut ComplaintsState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Esc {
        state.close_form();
        return EventResult::Consumed;
    }
    if key.code == KeyCode::Enter {
        return if state.confirm() {
            EventResult::status("Complaint submitted")
        } else {
            EventResult::Consumed
        };
    }

    let Some(form) = state.form.as_mut() else {
        return EventResult::Ignored;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left if form.focus.is_picker() => form.cycle_picker(false),
        KeyCode::Right if form.focus.is_picker() => form.cycle_picker(true),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.input(c),
        _ => {}
    }
    EventResult::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::COMPLAINT_CATEGORIES;
    use crate::tui::events::test_keys::{ch, key};

    #[test]
    fn test_open_type_submit() {
        let mut state = ComplaintsState::new();
        handle_complaints_key(&mut state, ch('n'));
        assert!(state.is_form_open());

        handle_complaints_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.form.as_ref().unwrap().category(), COMPLAINT_CATEGORIES[1]);

        handle_complaints_key(&mut state, key(KeyCode::Down));
        handle_complaints_key(&mut state, ch('q'));
        assert_eq!(state.form.as_ref().unwrap().title, "q");

        for _ in 0..3 {
            handle_complaints_key(&mut state, key(KeyCode::Enter));
        }
        assert_eq!(
            handle_complaints_key(&mut state, key(KeyCode::Enter)),
            EventResult::status("Complaint submitted")
        );
        assert!(!state.is_form_open());
    }

    #[test]
    fn test_escape_closes_form_only() {
        let mut state = ComplaintsState::new();
        handle_complaints_key(&mut state, ch('n'));
        assert_eq!(handle_complaints_key(&mut state, key(KeyCode::Esc)), EventResult::Consumed);
        assert!(!state.is_form_open());
        assert_eq!(handle_complaints_key(&mut state, key(KeyCode::Esc)), EventResult::Ignored);
    }
}
