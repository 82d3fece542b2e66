//! Screen renderers for the TUI.
//!
//! One renderer per logical screen. Each takes the screen's local state and
//! the injected [`Theme`](super::Theme); none of them reads the router.

mod announcements;
mod applications;
mod auth;
mod complaints;
mod dashboard;
mod emergency;
mod notifications;
mod onboarding;
mod profile;

pub use announcements::render_announcements;
pub use applications::render_applications;
pub use auth::render_auth;
pub use complaints::render_complaints;
pub use dashboard::render_dashboard;
pub use emergency::render_emergency;
pub use notifications::render_notifications;
pub use onboarding::render_onboarding;
pub use profile::render_profile;

use super::theme::Theme;
use super::widgets::render_empty_state;
use ratatui::prelude::*;

/// Screen with no content yet.
pub fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    render_empty_state(
        frame,
        area,
        &format!("{title}: this screen is coming soon"),
        Some("Press Esc to return to the dashboard"),
        theme,
    );
}
