//! Citizen profile: completion, details, achievements and actions.

use crate::content::{
    ProfileAction, ACHIEVEMENTS, PROFILE_ADDRESS, PROFILE_COMPLETION_PERCENT, PROFILE_EMAIL,
    PROFILE_PHONE, PROFILE_STATS,
};
use crate::model::Session;
use crate::tui::app_states::ProfileState;
use crate::tui::theme::Theme;
use crate::tui::widgets::{panel, render_stat_cards, row_style};
use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph},
};

pub fn render_profile(
    frame: &mut Frame,
    area: Rect,
    state: &ProfileState,
    session: &Session,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name
            Constraint::Length(3), // Completion gauge
            Constraint::Length(5), // Stats
            Constraint::Min(6),    // Info | achievements | actions
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", session.initials()),
                    Style::default()
                        .fg(theme.colors.tab_active_fg)
                        .bg(theme.colors.primary)
                        .bold(),
                ),
                Span::raw(" "),
                Span::styled(session.user_name().to_string(), theme.title()),
            ]),
            Line::styled("Verified citizen", theme.text_muted()),
        ]),
        chunks[0],
    );

    let gauge = Gauge::default()
        .block(panel("Profile Completion", theme, false))
        .gauge_style(Style::default().fg(theme.colors.primary).bg(theme.colors.surface))
        .percent(PROFILE_COMPLETION_PERCENT);
    frame.render_widget(gauge, chunks[1]);

    render_stat_cards(frame, chunks[2], &PROFILE_STATS, theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(chunks[3]);

    let info = vec![
        info_line("Full Name", session.user_name(), theme),
        info_line("Phone", PROFILE_PHONE, theme),
        info_line("Email", PROFILE_EMAIL, theme),
        info_line("Address", PROFILE_ADDRESS, theme),
    ];
    frame.render_widget(
        Paragraph::new(info).block(panel("Personal Information", theme, false)),
        columns[0],
    );

    let achievements: Vec<Line> = ACHIEVEMENTS
        .iter()
        .map(|a| {
            let (glyph, style) = if a.unlocked {
                ("★", Style::default().fg(theme.colors.warning).bold())
            } else {
                ("☆", theme.text_muted())
            };
            Line::from(vec![
                Span::styled(format!("{glyph} "), style),
                Span::styled(a.title, if a.unlocked { theme.text() } else { theme.text_muted() }),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(achievements).block(panel("Achievements", theme, false)),
        columns[1],
    );

    let selected = state.selected_action();
    let actions: Vec<Line> = ProfileAction::ALL
        .iter()
        .map(|action| {
            let is_selected = *action == selected;
            let style = if *action == ProfileAction::Logout && !is_selected {
                Style::default().fg(theme.colors.error)
            } else {
                row_style(is_selected, theme)
            };
            Line::styled(
                format!("{}{}", if is_selected { "▶ " } else { "  " }, action.label()),
                style,
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(actions).block(panel("Actions", theme, true)),
        columns[2],
    );
}

fn info_line(label: &str, value: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme.text_muted()),
        Span::styled(value.to_string(), theme.text()),
    ])
}
