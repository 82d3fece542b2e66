use crate::model::Screen;
use crate::router::NavRequest;
use crate::tui::app_states::DashboardState;
use crate::tui::traits::EventResult;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_dashboard_key(state: &mut DashboardState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => state.move_left(),
        KeyCode::Right | KeyCode::Char('l') => state.move_right(),
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::Enter => return EventResult::navigate(state.open()),
        KeyCode::Char('n') => {
            return EventResult::navigate(NavRequest::Navigate(Screen::Notifications))
        }
        KeyCode::Char('p') => return EventResult::navigate(NavRequest::Navigate(Screen::Profile)),
        _ => return EventResult::Ignored,
    }
    EventResult::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::events::test_keys::{ch, key};

    #[test]
    fn test_enter_opens_selected_tile() {
        let mut state = DashboardState::new();
        handle_dashboard_key(&mut state, key(KeyCode::Right));
        assert_eq!(
            handle_dashboard_key(&mut state, key(KeyCode::Enter)),
            EventResult::Navigate(NavRequest::Navigate(Screen::Complaints))
        );
    }

    #[test]
    fn test_shortcuts() {
        let mut state = DashboardState::new();
        assert_eq!(
            handle_dashboard_key(&mut state, ch('n')),
            EventResult::Navigate(NavRequest::Navigate(Screen::Notifications))
        );
        assert_eq!(handle_dashboard_key(&mut state, ch('t')), EventResult::Ignored);
    }
}
