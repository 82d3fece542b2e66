use crate::tui::app_states::EmergencyState;
use crate::tui::state::ListNavigation;
use crate::tui::traits::EventResult;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

pub(super) fn handle_emergency_key(
    state: &mut EmergencyState,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Home | KeyCode::Char('g') => state.go_first(),
        KeyCode::End | KeyCode::Char('G') => state.go_last(),
        KeyCode::Enter => {
            state.call_selected(now);
        }
        KeyCode::Char('s') => {
            state.call_sos(now);
        }
        _ => return EventResult::Ignored,
    }
    EventResult::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::events::test_keys::{ch, key};

    #[test]
    fn test_enter_calls_selected() {
        let mut state = EmergencyState::new();
        let now = Instant::now();
        handle_emergency_key(&mut state, key(KeyCode::Down), now);
        handle_emergency_key(&mut state, key(KeyCode::Down), now);
        handle_emergency_key(&mut state, key(KeyCode::Enter), now);
        assert_eq!(state.active_call.map(|c| c.number), Some("108"));
    }

    #[test]
    fn test_sos_key() {
        let mut state = EmergencyState::new();
        handle_emergency_key(&mut state, ch('s'), Instant::now());
        assert_eq!(state.active_call.map(|c| c.number), Some("112"));
    }
}
