//! Input for the TUI.
//!
//! [`EventHandler`] turns crossterm's blocking poll into [`Event`]s with a
//! timeout. Keys go to the current screen's handler first; whatever it
//! ignores falls through to the global bindings (tabs, theme, back, quit).

mod applications;
mod auth;
mod complaints;
mod dashboard;
mod emergency;
mod lists;
pub mod mouse;
mod onboarding;

use super::traits::EventResult;
use super::App;
use crate::model::Screen;
use crate::router::NavRequest;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::time::{Duration, Instant};

pub use mouse::handle_mouse_event;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Nothing arrived within the poll timeout; drives timers.
    Tick,
    Resize(u16, u16),
}

/// Polls the terminal, waiting at most one tick for input.
pub struct EventHandler {
    timeout: Duration,
}

impl EventHandler {
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Next input event, or [`Event::Tick`] when the timeout passes first.
    /// Focus and paste events are folded into `Tick`.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.timeout)? {
            return Ok(Event::Tick);
        }
        let event = match event::read()? {
            CrosstermEvent::Key(key) => Event::Key(key),
            CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        };
        Ok(event)
    }
}

/// Route one key press through the current screen, then the global bindings.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Status messages last until the next key
    app.clear_status_message();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    let now = Instant::now();
    let screens = &mut app.screens;
    let result = match app.router.current_screen() {
        Screen::Onboarding => onboarding::handle_onboarding_key(&mut screens.onboarding, key),
        Screen::Auth => auth::handle_auth_key(&mut screens.auth, key),
        Screen::Dashboard => dashboard::handle_dashboard_key(&mut screens.dashboard, key),
        Screen::Emergency => emergency::handle_emergency_key(&mut screens.emergency, key, now),
        Screen::Complaints => complaints::handle_complaints_key(&mut screens.complaints, key),
        Screen::Applications => {
            applications::handle_applications_key(&mut screens.applications, key)
        }
        Screen::Announcements => lists::handle_announcements_key(&mut screens.announcements, key),
        Screen::Notifications => lists::handle_notifications_key(&mut screens.notifications, key),
        Screen::Profile => lists::handle_profile_key(&mut screens.profile, key),
        Screen::QuickAction => EventResult::Ignored,
    };

    match result {
        EventResult::Ignored => handle_global_key(app, key),
        other => apply_result(app, other),
    }
}

/// Apply a screen's result to the app.
fn apply_result(app: &mut App, result: EventResult) {
    match result {
        EventResult::Consumed | EventResult::Ignored => {}
        EventResult::Navigate(request) => app.navigate(request),
        EventResult::StatusMessage(msg) => app.set_status_message(msg),
    }
}

/// Keys that mean the same thing on every screen.
fn handle_global_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => app.navigate(NavRequest::GoBack),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('d') => app.toggle_dark(),
        _ if app.router.tab_bar_visible() => handle_tab_key(app, key),
        _ => {}
    }
}

/// Tab bar keys, only while the bar is shown.
fn handle_tab_key(app: &mut App, key: KeyEvent) {
    let current = app.router.current_screen();
    let request = match key.code {
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.tab_bar.select(index)
        }
        KeyCode::Char(']') => Some(app.tab_bar.next_from(current)),
        KeyCode::Char('[') => Some(app.tab_bar.prev_from(current)),
        _ => None,
    };
    if let Some(request) = request {
        app.navigate(request);
    }
}

/// Test helpers for building key events.
#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}
