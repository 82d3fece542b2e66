//! **Citizen services in the terminal.**
//!
//! `janmitra` renders a citizen-services app (onboarding, sign-in, dashboard,
//! emergency contacts, complaints, applications, announcements, notifications
//! and profile) as an interactive terminal UI built on `ratatui`.
//!
//! ## Layout
//!
//! - **[`router`]**: [`ViewRouter`] is the single owner of the current
//!   [`Screen`] and the [`Session`]. Every navigation goes through one of its
//!   five transitions; none of them can fail.
//! - **[`tui`]**: the terminal application. The [`TabBar`](tui::TabBar) mirrors
//!   the router's screen and turns key presses and clicks into
//!   [`NavRequest`]s. Each screen has one renderer, parameterised by an
//!   injected [`Theme`](tui::Theme).
//! - **[`model`]**: the closed [`Screen`] enumeration and the [`Session`].
//! - **[`content`]**: the static records every screen displays.
//! - **[`config`]**: YAML configuration discovery, validation and saved
//!   preferences.
//!
//! ## Driving the router
//!
//! ```
//! use janmitra::{NavRequest, Screen, ViewRouter};
//!
//! let mut router = ViewRouter::default();
//! router.dispatch(NavRequest::CompleteOnboarding);
//! assert_eq!(router.current_screen(), Screen::Auth);
//! assert!(!router.tab_bar_visible());
//!
//! router.dispatch(NavRequest::Login);
//! router.dispatch(NavRequest::Navigate(Screen::Profile));
//! assert!(router.tab_bar_visible());
//!
//! router.dispatch(NavRequest::Logout);
//! assert_eq!(router.current_screen(), Screen::Onboarding);
//! ```

// Library code propagates errors; tests may unwrap
#![warn(clippy::unwrap_used)]
// Pedantic lints this crate opts out of
#![allow(
    // Cast safety: usize/u16/u32 casts are pervasive in TUI layout math and
    // all values are bounded by the static tables
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    // Variable names like `prev`/`next` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod model;
pub mod router;
pub mod tui;

pub use config::{AppConfig, AppConfigBuilder, ConfigError, SessionConfig, TuiConfig, Validatable};
pub use error::{JanmitraError, Result};
pub use model::{ParseScreenError, Screen, Session};
pub use router::{NavRequest, ViewRouter};
pub use tui::{App, TabBar, Theme, ThemeKind};
