//! Screen navigation and session state machine.
//!
//! [`ViewRouter`] is the single owner of the current [`Screen`] and the
//! [`Session`]. Screens and the tab bar never mutate either value directly; they
//! hand a [`NavRequest`] back to the router, which applies one of five
//! transitions:
//!
//! | request              | effect                                                    |
//! |----------------------|-----------------------------------------------------------|
//! | `CompleteOnboarding` | `onboarding → auth` (no-op on any other screen)           |
//! | `Login`              | authenticated, screen = `dashboard`                       |
//! | `Logout`             | unauthenticated, screen = `onboarding`                    |
//! | `Navigate(s)`        | screen = `s`                                              |
//! | `GoBack`             | `auth → onboarding`; authenticated → `dashboard`; else no-op |
//!
//! Every transition is total. The state is never persisted, so a restart
//! always begins at `(onboarding, unauthenticated)`.

use crate::model::{Screen, Session};
use serde::Serialize;

/// A navigation intent emitted by a screen or the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    CompleteOnboarding,
    Login,
    Logout,
    Navigate(Screen),
    GoBack,
}

/// Owner of "what is on screen" and "is the citizen signed in".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRouter {
    screen: Screen,
    session: Session,
}

impl ViewRouter {
    /// Router at the initial state: onboarding, unauthenticated.
    pub fn new(session: Session) -> Self {
        Self {
            screen: Screen::Onboarding,
            session,
        }
    }

    #[must_use]
    pub const fn current_screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        self.session.user_name()
    }

    /// Whether the tab bar is drawn.
    ///
    /// Derived on every call from the two state fields, never stored.
    #[must_use]
    pub const fn tab_bar_visible(&self) -> bool {
        self.session.is_authenticated() && !self.screen.is_pre_session()
    }

    /// Leave the onboarding slides for the sign-in form.
    pub fn complete_onboarding(&mut self) {
        if self.screen == Screen::Onboarding {
            self.set_screen(Screen::Auth);
        }
    }

    /// Start a session. No credentials are checked.
    pub fn login(&mut self) {
        self.session.set_authenticated(true);
        self.set_screen(Screen::Dashboard);
    }

    /// End the session and return to the initial screen.
    pub fn logout(&mut self) {
        self.session.set_authenticated(false);
        self.set_screen(Screen::Onboarding);
    }

    /// Show `screen`. The session is not consulted.
    pub fn navigate_to(&mut self, screen: Screen) {
        self.set_screen(screen);
    }

    /// Fixed two-rule back table; this is not a history stack.
    pub fn go_back(&mut self) {
        if self.screen == Screen::Auth {
            self.set_screen(Screen::Onboarding);
        } else if self.session.is_authenticated() {
            self.set_screen(Screen::Dashboard);
        }
    }

    /// Apply a request emitted by a child component.
    pub fn dispatch(&mut self, request: NavRequest) {
        match request {
            NavRequest::CompleteOnboarding => self.complete_onboarding(),
            NavRequest::Login => self.login(),
            NavRequest::Logout => self.logout(),
            NavRequest::Navigate(screen) => self.navigate_to(screen),
            NavRequest::GoBack => self.go_back(),
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        tracing::debug!(
            from = %self.screen,
            to = %screen,
            authenticated = self.session.is_authenticated(),
            "screen transition"
        );
        self.screen = screen;
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new(Session::default())
    }
}
