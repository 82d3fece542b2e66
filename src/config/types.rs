//! The YAML configuration model.
//!
//! Every struct is `#[serde(default)]`, so a file only needs the keys it
//! changes. The same types drive the JSON schema (`config schema`).

use crate::model::DEFAULT_USER_NAME;
use crate::tui::ThemeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root of `.janmitra.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub tui: TuiConfig,
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Starts from the defaults; each setter overrides one field.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.config.session.user_name = name.into();
        self
    }

    pub const fn theme(mut self, theme: ThemeKind) -> Self {
        self.config.tui.theme = theme;
        self
    }

    pub const fn dark(mut self, dark: bool) -> Self {
        self.config.tui.dark = dark;
        self
    }

    pub const fn mouse_enabled(mut self, enabled: bool) -> Self {
        self.config.tui.mouse_enabled = enabled;
        self
    }

    pub const fn tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.config.tui.tick_rate_ms = tick_rate_ms;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

/// `session:` section. The display name is fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SessionConfig {
    /// Name shown in greetings and on the profile screen
    pub user_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
        }
    }
}

/// Accepted range for `tui.tick_rate_ms`.
pub const MIN_TICK_RATE_MS: u64 = 16;
pub const MAX_TICK_RATE_MS: u64 = 2000;

/// `tui:` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Visual theme: bright, soft, health or janmitra
    pub theme: ThemeKind,
    /// Start in dark mode
    pub dark: bool,
    /// Enable mouse support (clicking tab bar items)
    pub mouse_enabled: bool,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 2000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            dark: false,
            mouse_enabled: true,
            tick_rate_ms: 250,
        }
    }
}

/// State remembered between runs, stored as JSON beside the user's other
/// config. Only the last theme so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    pub theme: Option<ThemeKind>,
}

impl TuiPreferences {
    /// `<config dir>/janmitra/preferences.json`, if the platform has one.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("janmitra").join("preferences.json"))
    }

    /// Preferences from the default location. A missing or corrupt file
    /// yields the defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Write to `path`, creating missing parent directories.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session.user_name, "Priya Sharma");
        assert_eq!(config.tui.theme, ThemeKind::Bright);
        assert!(config.tui.mouse_enabled);
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .user_name("Ravi Kumar")
            .theme(ThemeKind::JanMitra)
            .dark(true)
            .mouse_enabled(false)
            .tick_rate_ms(100)
            .build();
        assert_eq!(config.session.user_name, "Ravi Kumar");
        assert_eq!(config.tui.theme, ThemeKind::JanMitra);
        assert!(config.tui.dark);
        assert!(!config.tui.mouse_enabled);
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("tui:\n  theme: soft\n").unwrap();
        assert_eq!(config.tui.theme, ThemeKind::Soft);
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(config.session.user_name, "Priya Sharma");
    }

    #[test]
    fn test_preferences_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = TuiPreferences {
            theme: Some(ThemeKind::Health),
        };
        prefs.save_to(&path).unwrap();
        assert_eq!(TuiPreferences::load_from(&path), prefs);
    }

    #[test]
    fn test_preferences_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = TuiPreferences::load_from(&dir.path().join("absent.json"));
        assert_eq!(prefs, TuiPreferences::default());
    }
}
