use crate::content::ApplicationFilter;
use crate::tui::app_states::ApplicationsState;
use crate::tui::state::ListNavigation;
use crate::tui::traits::EventResult;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_applications_key(state: &mut ApplicationsState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Left => state.prev_filter(),
        KeyCode::Right => state.next_filter(),
        KeyCode::Char('a') => state.set_filter(ApplicationFilter::All),
        KeyCode::Char('p') => state.set_filter(ApplicationFilter::Pending),
        KeyCode::Char('c') => state.set_filter(ApplicationFilter::Completed),
        KeyCode::Up | KeyCode::Char('k') => state.list.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.list.select_next(),
        _ => return EventResult::Ignored,
    }
    EventResult::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::events::test_keys::{ch, key};

    #[test]
    fn test_filter_keys() {
        let mut state = ApplicationsState::new();
        handle_applications_key(&mut state, ch('p'));
        assert_eq!(state.filter, ApplicationFilter::Pending);
        handle_applications_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.filter, ApplicationFilter::Completed);
        handle_applications_key(&mut state, ch('a'));
        assert_eq!(state.filter, ApplicationFilter::All);
    }
}
