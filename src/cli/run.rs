//! Run command handler.
//!
//! Implements the `run` subcommand: resolve the configuration and start the
//! terminal UI.

use crate::config::{AppConfig, TuiPreferences, Validatable};
use crate::error::JanmitraError;
use crate::tui::{run_tui, App, ThemeKind};
use anyhow::Result;

/// Command-line overrides for the `run` subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOverrides {
    pub theme: Option<ThemeKind>,
    pub user_name: Option<String>,
    pub dark: bool,
    pub no_mouse: bool,
}

/// Layer saved preferences and CLI flags over the file configuration.
///
/// Theme precedence: `--theme`, then the remembered theme, then the file.
#[must_use]
pub fn resolve_config(
    mut config: AppConfig,
    prefs: &TuiPreferences,
    overrides: &RunOverrides,
) -> AppConfig {
    if let Some(theme) = overrides.theme.or(prefs.theme) {
        config.tui.theme = theme;
    }
    if let Some(name) = &overrides.user_name {
        config.session.user_name.clone_from(name);
    }
    if overrides.dark {
        config.tui.dark = true;
    }
    if overrides.no_mouse {
        config.tui.mouse_enabled = false;
    }
    config
}

/// Run the interactive UI with a resolved configuration.
#[allow(clippy::needless_pass_by_value)]
pub fn run_app(config: AppConfig) -> Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(JanmitraError::InvalidConfig(errors).into());
    }

    let mut app = App::from_config(&config);
    run_tui(&mut app)?;
    tracing::info!("terminal UI closed");
    Ok(())
}
