//! Keys for the read-only list screens.

use crate::content::ProfileAction;
use crate::router::NavRequest;
use crate::tui::app_states::{AnnouncementsState, NotificationsState, ProfileState};
use crate::tui::state::ListNavigation;
use crate::tui::traits::EventResult;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_announcements_key(
    state: &mut AnnouncementsState,
    key: KeyEvent,
) -> EventResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.list.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.list.select_next(),
        _ => return EventResult::Ignored,
    }
    EventResult::Consumed
}

pub(super) fn handle_notifications_key(
    state: &mut NotificationsState,
    key: KeyEvent,
) -> EventResult {
    match key.code {
        KeyCode::Left => state.prev_filter(),
        KeyCode::Right => state.next_filter(),
        KeyCode::Up | KeyCode::Char('k') => state.list.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.list.select_next(),
        KeyCode::Char('m') => {
            state.mark_all_read();
            return EventResult::status("All notifications marked as read");
        }
        _ => return EventResult::Ignored,
    }
    EventResult::Consumed
}

pub(super) fn handle_profile_key(state: &mut ProfileState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.actions.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.actions.select_next(),
        KeyCode::Char('L') => return EventResult::navigate(NavRequest::Logout),
        KeyCode::Enter => {
            return match state.selected_action() {
                ProfileAction::Logout => EventResult::navigate(NavRequest::Logout),
                action => EventResult::status(format!("{} is coming soon", action.label())),
            }
        }
        _ => return EventResult::Ignored,
    }
    EventResult::Consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NotificationFilter;
    use crate::tui::events::test_keys::{ch, key};

    #[test]
    fn test_notifications_filter_and_mark() {
        let mut state = NotificationsState::new();
        handle_notifications_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.filter, NotificationFilter::City);
        assert!(matches!(
            handle_notifications_key(&mut state, ch('m')),
            EventResult::StatusMessage(_)
        ));
        assert!(state.all_read);
    }

    #[test]
    fn test_profile_logout_via_list() {
        let mut state = ProfileState::default();
        assert!(matches!(
            handle_profile_key(&mut state, key(KeyCode::Enter)),
            EventResult::StatusMessage(_)
        ));
        for _ in 0..3 {
            handle_profile_key(&mut state, key(KeyCode::Down));
        }
        assert_eq!(
            handle_profile_key(&mut state, key(KeyCode::Enter)),
            EventResult::Navigate(NavRequest::Logout)
        );
    }

    #[test]
    fn test_announcements_scroll() {
        let mut state = AnnouncementsState::default();
        handle_announcements_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.list.selected, 1);
        assert_eq!(handle_announcements_key(&mut state, ch('q')), EventResult::Ignored);
    }
}
