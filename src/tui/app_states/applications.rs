//! Applications filter and selection.

use crate::content::{filter_applications, Application, ApplicationFilter};
use crate::tui::state::ListState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationsState {
    pub filter: ApplicationFilter,
    pub list: ListState,
}

impl Default for ApplicationsState {
    fn default() -> Self {
        let filter = ApplicationFilter::default();
        Self {
            filter,
            list: ListState::with_total(filter_applications(filter).count()),
        }
    }
}

impl ApplicationsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, filter: ApplicationFilter) {
        self.filter = filter;
        self.list = ListState::with_total(filter_applications(filter).count());
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&'static Application> {
        filter_applications(self.filter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::ListNavigation;

    #[test]
    fn test_filter_change_resets_selection() {
        let mut state = ApplicationsState::new();
        state.list.go_last();
        state.set_filter(ApplicationFilter::Completed);
        assert_eq!(state.list.selected(), 0);
        assert_eq!(state.list.total(), state.visible().len());
        assert!(state.visible().iter().all(|a| a.status.is_completed()));
    }

    #[test]
    fn test_filter_cycle() {
        let mut state = ApplicationsState::new();
        state.prev_filter();
        assert_eq!(state.filter, ApplicationFilter::Completed);
        state.next_filter();
        assert_eq!(state.filter, ApplicationFilter::All);
    }
}
