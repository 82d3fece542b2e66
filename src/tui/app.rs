//! Application state for the terminal UI.

use super::app_states::ScreenStates;
use super::tabbar::TabBar;
use super::theme::{Theme, ThemeKind};
use crate::config::{AppConfig, TuiPreferences};
use crate::model::{Screen, Session};
use crate::router::{NavRequest, ViewRouter};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Instant;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Screen and session; the only navigation state
    pub(crate) router: ViewRouter,
    /// Injected into every renderer
    pub(crate) theme: Theme,
    /// Follows the theme's tab variant
    pub(crate) tab_bar: TabBar,
    /// Per-screen local state
    pub(crate) screens: ScreenStates,
    /// Should quit
    pub(crate) should_quit: bool,
    /// Status message to display temporarily
    pub(crate) status_message: Option<String>,
    /// Where the tab bar was last drawn, for mouse hit-testing
    pub(crate) tab_bar_area: Option<Rect>,
    pub(crate) mouse_enabled: bool,
    pub(crate) tick_rate_ms: u64,
    /// Where the theme choice is saved; `None` disables saving
    pub(crate) preferences_path: Option<PathBuf>,
}

impl App {
    /// App at the initial state with the given session and theme.
    #[must_use]
    pub fn new(session: Session, theme: Theme) -> Self {
        Self {
            router: ViewRouter::new(session),
            tab_bar: TabBar::new(theme.tab_variant()),
            theme,
            screens: ScreenStates::default(),
            should_quit: false,
            status_message: None,
            tab_bar_area: None,
            mouse_enabled: true,
            tick_rate_ms: crate::config::TuiConfig::default().tick_rate_ms,
            preferences_path: None,
        }
    }

    /// App configured from the resolved configuration.
    ///
    /// Theme changes are saved to the user's preferences file.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let mut app = Self::new(
            Session::new(config.session.user_name.clone()),
            Theme::new(config.tui.theme, config.tui.dark),
        );
        app.mouse_enabled = config.tui.mouse_enabled;
        app.tick_rate_ms = config.tui.tick_rate_ms;
        app.preferences_path = TuiPreferences::config_path();
        app
    }

    #[must_use]
    pub fn with_preferences_path(mut self, path: Option<PathBuf>) -> Self {
        self.preferences_path = path;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub const fn router(&self) -> &ViewRouter {
        &self.router
    }

    #[must_use]
    pub const fn current_screen(&self) -> Screen {
        self.router.current_screen()
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub const fn tab_bar(&self) -> &TabBar {
        &self.tab_bar
    }

    #[must_use]
    pub const fn screens(&self) -> &ScreenStates {
        &self.screens
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    #[must_use]
    pub const fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms
    }

    #[must_use]
    pub const fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Apply a router transition. The entered screen starts with fresh local state.
    pub fn navigate(&mut self, request: NavRequest) {
        let before = self.router.current_screen();
        self.router.dispatch(request);
        let after = self.router.current_screen();
        if after != before {
            self.screens.reset(after);
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Switch to `theme`, rebuilding the tab bar for its variant.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.tab_bar = TabBar::new(theme.tab_variant());
    }

    /// Move to the next theme and remember it for the next run.
    pub fn cycle_theme(&mut self) {
        self.set_theme(self.theme.next());
        self.save_theme_preference(self.theme.kind);
        self.set_status_message(format!("Theme: {}", self.theme.name()));
    }

    pub fn toggle_dark(&mut self) {
        self.set_theme(self.theme.with_dark(!self.theme.dark));
        let mode = if self.theme.dark { "dark" } else { "light" };
        self.set_status_message(format!("Switched to {mode} mode"));
    }

    fn save_theme_preference(&self, kind: ThemeKind) {
        let Some(path) = &self.preferences_path else {
            return;
        };
        let prefs = TuiPreferences { theme: Some(kind) };
        if let Err(e) = prefs.save_to(path) {
            tracing::warn!(path = %path.display(), "failed to save theme preference: {e}");
        }
    }

    // ========================================================================
    // Status and ticks
    // ========================================================================

    /// Set a status message.
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Expire the emergency call banner once its time is up.
    pub fn on_tick(&mut self, now: Instant) {
        self.screens.emergency.expire(now);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Session::default(), Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tabbar::TabVariant;

    #[test]
    fn test_navigate_resets_entered_screen() {
        let mut app = App::default();
        app.navigate(NavRequest::Login);
        app.navigate(NavRequest::Navigate(Screen::Notifications));
        app.screens.notifications.mark_all_read();

        app.navigate(NavRequest::Navigate(Screen::Dashboard));
        app.navigate(NavRequest::Navigate(Screen::Notifications));
        assert!(!app.screens.notifications.all_read);
    }

    #[test]
    fn test_navigate_same_screen_keeps_state() {
        let mut app = App::default();
        app.navigate(NavRequest::Login);
        app.screens.dashboard.move_right();
        app.navigate(NavRequest::Navigate(Screen::Dashboard));
        assert_eq!(app.screens.dashboard.selected, 1);
    }

    #[test]
    fn test_cycle_theme_swaps_tab_variant() {
        let mut app = App::new(Session::default(), Theme::new(ThemeKind::Health, false));
        assert_eq!(app.tab_bar.variant(), TabVariant::Emergency);
        app.cycle_theme();
        assert_eq!(app.theme.kind, ThemeKind::JanMitra);
        assert_eq!(app.tab_bar.variant(), TabVariant::QuickAction);
        assert_eq!(app.status_message(), Some("Theme: janmitra"));
    }

    #[test]
    fn test_cycle_theme_saves_preference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let mut app = App::default().with_preferences_path(Some(path.clone()));
        app.cycle_theme();
        let prefs = TuiPreferences::load_from(&path);
        assert_eq!(prefs.theme, Some(ThemeKind::Soft));
    }

    #[test]
    fn test_toggle_dark() {
        let mut app = App::default();
        app.toggle_dark();
        assert!(app.theme.dark);
        assert_eq!(app.theme.kind, ThemeKind::Bright);
    }

    #[test]
    fn test_status_message_clears() {
        let mut app = App::default();
        app.set_status_message("Theme: soft");
        assert_eq!(app.status_message(), Some("Theme: soft"));
        app.clear_status_message();
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig::builder()
            .user_name("Ravi Kumar")
            .theme(ThemeKind::JanMitra)
            .mouse_enabled(false)
            .tick_rate_ms(100)
            .build();
        let app = App::from_config(&config);
        assert_eq!(app.router().user_name(), "Ravi Kumar");
        assert_eq!(app.tab_bar().variant(), TabVariant::QuickAction);
        assert!(!app.mouse_enabled());
        assert_eq!(app.tick_rate_ms(), 100);
        assert_eq!(app.current_screen(), Screen::Onboarding);
    }
}
