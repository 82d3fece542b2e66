//! Interactive terminal UI using ratatui.
//!
//! The [`App`] owns the [`ViewRouter`](crate::router::ViewRouter), the
//! injected [`Theme`] and each screen's local state. Key and mouse events go
//! to the current screen's handler first; whatever it ignores falls through to
//! the global keys and the [`TabBar`]. Rendering dispatches exhaustively over
//! [`Screen`](crate::model::Screen) to one renderer per screen.

mod app;
pub mod app_states;
mod events;
pub mod state;
pub mod tabbar;
pub mod theme;
pub mod traits;
mod ui;
mod views;
pub(crate) mod widgets;

// Theme exports
pub use theme::{
    render_footer_hints, ColorScheme, FooterHints, ParseThemeError, Theme, ThemeKind,
};

pub use tabbar::{render_tab_bar, TabBar, TabItem, TabVariant, ACTIVE_MARKER, TAB_BAR_HEIGHT};

pub use traits::EventResult;

// Shared state exports
pub use state::{ListNavigation, ListState};

pub use app::App;
pub use events::{handle_key_event, handle_mouse_event, Event, EventHandler};
pub use ui::{render, run_tui};
pub use widgets::{check_terminal_size, MIN_HEIGHT, MIN_WIDTH};
