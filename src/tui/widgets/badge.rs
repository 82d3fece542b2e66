//! Status badge for consistent status display.

use crate::content::Tone;
use crate::tui::theme::Theme;
use ratatui::prelude::*;

/// A styled badge showing a status label in its tone color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    label: &'static str,
    tone: Tone,
}

impl StatusBadge {
    pub const fn new(label: &'static str, tone: Tone) -> Self {
        Self { label, tone }
    }

    /// Single-character glyph for the tone.
    pub const fn indicator(tone: Tone) -> &'static str {
        match tone {
            Tone::Success => "✓",
            Tone::Pending => "◔",
            Tone::Action => "!",
            Tone::Info => "i",
            Tone::Urgent => "⚠",
        }
    }

    /// Convert to a Span for inline use.
    pub fn to_span(&self, theme: &Theme) -> Span<'static> {
        Span::styled(format!(" {} ", self.label), theme.badge(self.tone))
    }

    /// Colored glyph without a background, for dense lists.
    pub fn indicator_span(&self, theme: &Theme) -> Span<'static> {
        Span::styled(
            Self::indicator(self.tone),
            Style::default().fg(theme.colors.tone(self.tone)).bold(),
        )
    }
}
