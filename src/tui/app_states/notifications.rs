//! Notifications filter and read marker.

use crate::content::{filter_notifications, Notification, NotificationFilter};
use crate::tui::state::ListState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationsState {
    pub filter: NotificationFilter,
    pub list: ListState,
    /// Set by "mark all read"; lost when the screen is left.
    pub all_read: bool,
}

impl Default for NotificationsState {
    fn default() -> Self {
        let filter = NotificationFilter::default();
        Self {
            filter,
            list: ListState::with_total(filter_notifications(filter).count()),
            all_read: false,
        }
    }
}

impl NotificationsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, filter: NotificationFilter) {
        self.filter = filter;
        self.list = ListState::with_total(filter_notifications(filter).count());
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    pub fn mark_all_read(&mut self) {
        self.all_read = true;
    }

    #[must_use]
    pub const fn is_unread(&self, notification: &Notification) -> bool {
        notification.is_new && !self.all_read
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&'static Notification> {
        filter_notifications(self.filter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{unread_count, NOTIFICATIONS};

    #[test]
    fn test_mark_all_read() {
        let mut state = NotificationsState::new();
        let unread = NOTIFICATIONS.iter().filter(|n| state.is_unread(n)).count();
        assert_eq!(unread, unread_count(&NOTIFICATIONS));
        state.mark_all_read();
        assert!(NOTIFICATIONS.iter().all(|n| !state.is_unread(n)));
    }

    #[test]
    fn test_filter_updates_total() {
        let mut state = NotificationsState::new();
        state.next_filter();
        assert_eq!(state.filter, NotificationFilter::Updates);
        assert_eq!(state.list.total, state.visible().len());
    }
}
