//! Onboarding slides.

use crate::content::{APP_NAME, APP_TAGLINE, SLIDES, TERMS_NOTICE};
use crate::tui::app_states::OnboardingState;
use crate::tui::theme::Theme;
use crate::tui::widgets::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

pub fn render_onboarding(frame: &mut Frame, area: Rect, state: &OnboardingState, theme: &Theme) {
    let card = centered_rect(80, 80, area);
    let slide = state.current();
    let tint = theme.colors.card(state.slide);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(tint))
        .title(Span::styled(format!(" {APP_NAME} · {APP_TAGLINE} "), theme.title()))
        .title_alignment(Alignment::Center);

    let action = if state.is_last() { "Get Started" } else { "Next" };
    let lines = vec![
        Line::from(""),
        Line::styled(slide.glyph, Style::default().fg(theme.colors.accent).bold()),
        Line::from(""),
        Line::styled(slide.title, theme.title()),
        Line::styled(slide.subtitle, Style::default().fg(theme.colors.secondary).bold()),
        Line::from(""),
        Line::styled(slide.description, theme.text()),
        Line::from(""),
        slide_dots(state.slide, theme),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", theme.shortcut_key()),
            Span::styled(action, theme.value()),
            Span::styled("   [s] ", theme.shortcut_key()),
            Span::styled("Skip", theme.text_muted()),
        ]),
        Line::from(""),
        Line::styled(TERMS_NOTICE, theme.text_muted().italic()),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        card,
    );
}

/// Position indicator: the current slide is a wide bar, the others dots.
fn slide_dots(current: usize, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = (0..SLIDES.len())
        .map(|i| {
            if i == current {
                Span::styled("━━ ", Style::default().fg(theme.colors.primary).bold())
            } else {
                Span::styled("• ", theme.text_muted())
            }
        })
        .collect();
    Line::from(spans)
}
