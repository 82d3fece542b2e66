//! Theme and color scheme for the TUI.
//!
//! Every screen exists once; its look comes from the [`Theme`] value handed to
//! the renderer. There is no global theme: the [`App`](super::App) owns one
//! `Theme` and passes it down.

use crate::content::Tone;
use crate::model::Screen;
use crate::tui::tabbar::TabVariant;
use clap::ValueEnum;
use ratatui::prelude::*;
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The visual families of the app.
///
/// Deserialization goes through [`FromStr`](std::str::FromStr), so config
/// files may write `JanMitra`, `jan-mitra` or `JAN_MITRA`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Pastel cards on lavender, deep purple accents
    #[default]
    Bright,
    /// Soft gradients and rounded pastel tiles
    Soft,
    /// Calm blues for health services
    Health,
    /// Teal and orange with citizen progress tracking
    #[value(name = "janmitra", alias = "jan-mitra")]
    JanMitra,
}

impl ThemeKind {
    pub const ALL: [Self; 4] = [Self::Bright, Self::Soft, Self::Health, Self::JanMitra];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bright => "bright",
            Self::Soft => "soft",
            Self::Health => "health",
            Self::JanMitra => "janmitra",
        }
    }

    /// Next theme in the rotation (bright → soft → health → janmitra → bright).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Bright => Self::Soft,
            Self::Soft => Self::Health,
            Self::Health => Self::JanMitra,
            Self::JanMitra => Self::Bright,
        }
    }

    /// Which centre tab this family puts in the tab bar.
    #[must_use]
    pub const fn tab_variant(self) -> TabVariant {
        match self {
            Self::Bright | Self::Soft | Self::Health => TabVariant::Emergency,
            Self::JanMitra => TabVariant::QuickAction,
        }
    }
}

impl std::fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text does not name a [`ThemeKind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme '{0}' (expected one of: bright, soft, health, janmitra)")]
pub struct ParseThemeError(pub String);

impl std::str::FromStr for ThemeKind {
    type Err = ParseThemeError;

    /// Case-insensitive; `-` and `_` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ParseThemeError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for ThemeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Semantic colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // Chrome
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection_bg: Color,

    // Tones
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Text drawn on tone backgrounds
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,

    // Tab bar
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,

    /// Card tints, cycled across tiles and stat cards
    pub cards: [Color; 5],
}

impl ColorScheme {
    /// Scheme for `kind`, optionally in dark mode.
    #[must_use]
    pub fn for_kind(kind: ThemeKind, dark: bool) -> Self {
        let light = match kind {
            ThemeKind::Bright => Self::bright(),
            ThemeKind::Soft => Self::soft(),
            ThemeKind::Health => Self::health(),
            ThemeKind::JanMitra => Self::janmitra(),
        };
        if dark {
            light.darkened()
        } else {
            light
        }
    }

    fn bright() -> Self {
        Self {
            primary: Color::Rgb(67, 22, 92),
            secondary: Color::Rgb(43, 35, 82),
            accent: Color::Rgb(188, 164, 255),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(188, 164, 255),
            border_focused: Color::Rgb(67, 22, 92),
            background: Color::Rgb(240, 239, 255),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(43, 35, 82),
            text_muted: Color::Rgb(107, 114, 128),
            selection_bg: Color::Rgb(250, 210, 225),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(217, 119, 6),
            error: Color::Rgb(220, 38, 38),
            info: Color::Rgb(37, 99, 235),
            badge_fg_dark: Color::Rgb(43, 35, 82),
            badge_fg_light: Color::White,
            tab_active_bg: Color::Rgb(67, 22, 92),
            tab_active_fg: Color::White,
            cards: [
                Color::Rgb(188, 164, 255),
                Color::Rgb(163, 224, 255),
                Color::Rgb(180, 248, 200),
                Color::Rgb(250, 210, 225),
                Color::Rgb(255, 225, 174),
            ],
        }
    }

    fn soft() -> Self {
        Self {
            primary: Color::Rgb(168, 85, 247),
            secondary: Color::Rgb(59, 130, 246),
            accent: Color::Rgb(236, 72, 153),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(221, 214, 254),
            border_focused: Color::Rgb(168, 85, 247),
            background: Color::Rgb(248, 250, 252),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(55, 65, 81),
            text_muted: Color::Rgb(107, 114, 128),
            selection_bg: Color::Rgb(243, 232, 255),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(234, 179, 8),
            error: Color::Rgb(239, 68, 68),
            info: Color::Rgb(59, 130, 246),
            badge_fg_dark: Color::Rgb(55, 65, 81),
            badge_fg_light: Color::White,
            tab_active_bg: Color::Rgb(168, 85, 247),
            tab_active_fg: Color::White,
            cards: [
                Color::Rgb(219, 234, 254),
                Color::Rgb(243, 232, 255),
                Color::Rgb(220, 252, 231),
                Color::Rgb(254, 226, 226),
                Color::Rgb(254, 249, 195),
            ],
        }
    }

    fn health() -> Self {
        Self {
            primary: Color::Rgb(79, 70, 229),
            secondary: Color::Rgb(37, 99, 235),
            accent: Color::Rgb(16, 185, 129),
            muted: Color::Rgb(148, 163, 184),
            border: Color::Rgb(191, 219, 254),
            border_focused: Color::Rgb(79, 70, 229),
            background: Color::Rgb(239, 246, 255),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(30, 41, 59),
            text_muted: Color::Rgb(100, 116, 139),
            selection_bg: Color::Rgb(224, 231, 255),
            success: Color::Rgb(16, 185, 129),
            warning: Color::Rgb(245, 158, 11),
            error: Color::Rgb(239, 68, 68),
            info: Color::Rgb(37, 99, 235),
            badge_fg_dark: Color::Rgb(30, 41, 59),
            badge_fg_light: Color::White,
            tab_active_bg: Color::Rgb(79, 70, 229),
            tab_active_fg: Color::White,
            cards: [
                Color::Rgb(219, 234, 254),
                Color::Rgb(224, 231, 255),
                Color::Rgb(220, 252, 231),
                Color::Rgb(255, 237, 213),
                Color::Rgb(243, 232, 255),
            ],
        }
    }

    fn janmitra() -> Self {
        Self {
            primary: Color::Rgb(51, 217, 178),
            secondary: Color::Rgb(139, 92, 246),
            accent: Color::Rgb(255, 152, 0),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(196, 181, 253),
            border_focused: Color::Rgb(51, 217, 178),
            background: Color::Rgb(245, 243, 255),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(17, 24, 39),
            text_muted: Color::Rgb(107, 114, 128),
            selection_bg: Color::Rgb(204, 251, 241),
            success: Color::Rgb(51, 217, 178),
            warning: Color::Rgb(255, 152, 0),
            error: Color::Rgb(239, 68, 68),
            info: Color::Rgb(59, 130, 246),
            badge_fg_dark: Color::Rgb(17, 24, 39),
            badge_fg_light: Color::White,
            tab_active_bg: Color::Rgb(255, 152, 0),
            tab_active_fg: Color::Black,
            cards: [
                Color::Rgb(254, 226, 226),
                Color::Rgb(254, 249, 195),
                Color::Rgb(219, 234, 254),
                Color::Rgb(243, 232, 255),
                Color::Rgb(204, 251, 241),
            ],
        }
    }

    /// Same hues on a night background.
    #[must_use]
    pub fn darkened(self) -> Self {
        Self {
            background: Color::Rgb(15, 15, 35),
            surface: Color::Rgb(30, 30, 50),
            text: Color::Rgb(229, 231, 235),
            text_muted: Color::Rgb(156, 163, 175),
            muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(55, 65, 81),
            selection_bg: Color::Rgb(60, 60, 80),
            badge_fg_dark: Color::Rgb(15, 15, 35),
            ..self
        }
    }

    /// Color for a status tone.
    #[must_use]
    pub const fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Success => self.success,
            Tone::Pending => self.warning,
            Tone::Action | Tone::Urgent => self.error,
            Tone::Info => self.info,
        }
    }

    /// Card tint for the `index`-th tile.
    #[must_use]
    pub const fn card(&self, index: usize) -> Color {
        self.cards[index % self.cards.len()]
    }
}

/// Theme configuration handed to every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub dark: bool,
    pub colors: ColorScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeKind::default(), false)
    }
}

impl Theme {
    #[must_use]
    pub fn new(kind: ThemeKind, dark: bool) -> Self {
        Self {
            kind,
            dark,
            colors: ColorScheme::for_kind(kind, dark),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub const fn tab_variant(&self) -> TabVariant {
        self.kind.tab_variant()
    }

    /// Whether the dashboard shows level/XP/streak figures.
    #[must_use]
    pub const fn shows_progress(&self) -> bool {
        matches!(self.kind, ThemeKind::JanMitra)
    }

    /// Get the next theme in the rotation, keeping dark mode.
    #[must_use]
    pub fn next(&self) -> Self {
        Self::new(self.kind.next(), self.dark)
    }

    #[must_use]
    pub fn with_dark(&self, dark: bool) -> Self {
        Self::new(self.kind, dark)
    }

    // ========================================================================
    // Style Helpers
    // ========================================================================

    /// Base style: theme text on theme background.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.colors.text)
            .bg(self.colors.background)
    }

    #[must_use]
    pub fn title(&self) -> Style {
        Style::default().fg(self.colors.primary).bold()
    }

    #[must_use]
    pub fn text(&self) -> Style {
        Style::default().fg(self.colors.text)
    }

    #[must_use]
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.colors.text_muted)
    }

    #[must_use]
    pub fn value(&self) -> Style {
        Style::default().fg(self.colors.text).bold()
    }

    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.colors.selection_bg)
            .fg(self.colors.text)
            .bold()
    }

    #[must_use]
    pub fn border(&self) -> Style {
        Style::default().fg(self.colors.border)
    }

    #[must_use]
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.colors.border_focused)
    }

    #[must_use]
    pub fn shortcut_key(&self) -> Style {
        Style::default().fg(self.colors.accent).bold()
    }

    #[must_use]
    pub fn shortcut_desc(&self) -> Style {
        Style::default().fg(self.colors.text_muted)
    }

    /// Badge with a tone background.
    #[must_use]
    pub fn badge(&self, tone: Tone) -> Style {
        let fg = match tone {
            Tone::Pending => self.colors.badge_fg_dark,
            _ => self.colors.badge_fg_light,
        };
        Style::default().fg(fg).bg(self.colors.tone(tone)).bold()
    }
}

/// Key hints for the footer line, as `(key, action)` pairs.
pub struct FooterHints;

impl FooterHints {
    /// Hints for a screen, followed by the global ones.
    pub fn for_screen(screen: Screen, tab_bar_visible: bool) -> Vec<(&'static str, &'static str)> {
        let mut hints = match screen {
            Screen::Onboarding => vec![("→/Enter", "next"), ("←", "previous"), ("s", "skip")],
            Screen::Auth => vec![
                ("Tab", "next field"),
                ("Enter", "submit"),
                ("^T", "sign in/up"),
                ("^P", "show password"),
            ],
            Screen::Dashboard => vec![
                ("←↑↓→", "select"),
                ("Enter", "open"),
                ("n", "updates"),
                ("p", "profile"),
            ],
            Screen::Emergency => vec![("↑↓", "select"), ("Enter", "call"), ("s", "SOS 112")],
            Screen::Complaints => vec![("n", "new complaint"), ("↑↓", "select")],
            Screen::Applications => vec![("←→", "filter"), ("↑↓", "select")],
            Screen::Announcements => vec![("↑↓", "select")],
            Screen::Notifications => vec![("←→", "filter"), ("m", "mark read")],
            Screen::Profile => vec![("↑↓", "select"), ("Enter", "open"), ("L", "logout")],
            Screen::QuickAction => vec![],
        };

        if tab_bar_visible {
            hints.push(("1-5", "tabs"));
        }
        hints.extend(Self::global(screen));
        hints
    }

    /// Bindings handled outside the screen. Auth consumes printable keys, so
    /// only `^C` quits there.
    pub fn global(screen: Screen) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::new();
        if screen != Screen::Onboarding {
            hints.push(("Esc", "back"));
        }
        if screen == Screen::Auth {
            hints.push(("^C", "quit"));
        } else {
            hints.extend([("t", "theme"), ("d", "dark"), ("q", "quit")]);
        }
        hints
    }
}

/// `[key]action` pairs separated by single spaces.
pub fn render_footer_hints(theme: &Theme, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = (i > 0).then(|| Span::raw(" "));
            gap.into_iter().chain([
                Span::styled(format!("[{key}]"), theme.shortcut_key()),
                Span::styled((*action).to_string(), theme.shortcut_desc()),
            ])
        })
        .collect()
}
