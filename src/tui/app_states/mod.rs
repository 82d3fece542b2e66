//! Screen-local state.
//!
//! Each screen keeps its view state (slide, filter, focused field) here. None
//! of it is router state: the router never reads it, and entering a screen
//! starts it fresh.

pub mod applications;
pub mod auth;
pub mod complaints;
pub mod dashboard;
pub mod emergency;
pub mod notifications;
pub mod onboarding;

pub use applications::ApplicationsState;
pub use auth::{AuthField, AuthMode, AuthState, PASSWORD_MASK};
pub use complaints::{ComplaintField, ComplaintForm, ComplaintsState};
pub use dashboard::{DashboardState, GRID_COLUMNS};
pub use emergency::{ActiveCall, EmergencyState, CALL_BANNER_DURATION};
pub use notifications::NotificationsState;
pub use onboarding::OnboardingState;

use crate::content::{ProfileAction, ANNOUNCEMENTS};
use crate::model::Screen;
use crate::tui::state::{ListNavigation, ListState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementsState {
    pub list: ListState,
}

impl Default for AnnouncementsState {
    fn default() -> Self {
        Self {
            list: ListState::with_total(ANNOUNCEMENTS.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub actions: ListState,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            actions: ListState::with_total(ProfileAction::ALL.len()),
        }
    }
}

impl ProfileState {
    #[must_use]
    pub fn selected_action(&self) -> ProfileAction {
        ProfileAction::ALL[self.actions.selected().min(ProfileAction::ALL.len() - 1)]
    }
}

/// Local state for every screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenStates {
    pub onboarding: OnboardingState,
    pub auth: AuthState,
    pub dashboard: DashboardState,
    pub emergency: EmergencyState,
    pub complaints: ComplaintsState,
    pub applications: ApplicationsState,
    pub announcements: AnnouncementsState,
    pub notifications: NotificationsState,
    pub profile: ProfileState,
}

impl ScreenStates {
    /// Start `screen` from scratch.
    pub fn reset(&mut self, screen: Screen) {
        match screen {
            Screen::Onboarding => self.onboarding = OnboardingState::default(),
            Screen::Auth => self.auth = AuthState::default(),
            Screen::Dashboard => self.dashboard = DashboardState::default(),
            Screen::Emergency => self.emergency = EmergencyState::default(),
            Screen::Complaints => self.complaints = ComplaintsState::default(),
            Screen::Applications => self.applications = ApplicationsState::default(),
            Screen::Announcements => self.announcements = AnnouncementsState::default(),
            Screen::Notifications => self.notifications = NotificationsState::default(),
            Screen::Profile => self.profile = ProfileState::default(),
            Screen::QuickAction => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_only_touches_one_screen() {
        let mut states = ScreenStates::default();
        states.notifications.mark_all_read();
        states.dashboard.move_right();

        states.reset(Screen::Notifications);
        assert!(!states.notifications.all_read);
        assert_eq!(states.dashboard.selected, 1);
    }

    #[test]
    fn test_profile_selected_action() {
        let mut states = ScreenStates::default();
        assert_eq!(states.profile.selected_action(), ProfileAction::EditProfile);
        states.profile.actions.go_last();
        assert_eq!(states.profile.selected_action(), ProfileAction::Logout);
    }
}
