//! Home dashboard: greeting, stats, service grid and recent activity.

use crate::content::{greeting, CITIZEN_PROGRESS, DASHBOARD_STATS, RECENT_ACTIVITY, SERVICES};
use crate::model::Session;
use crate::tui::app_states::{DashboardState, GRID_COLUMNS};
use crate::tui::theme::Theme;
use crate::tui::widgets::{panel, render_screen_header, render_stat_cards, StatusBadge};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    session: &Session,
    hour: u32,
    theme: &Theme,
) {
    let progress_height = if theme.shows_progress() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),               // Greeting
            Constraint::Length(progress_height), // Level / XP strip
            Constraint::Length(5),               // Stats cards
            Constraint::Length(8),               // Service grid
            Constraint::Min(3),                  // Recent activity
        ])
        .split(area);

    render_screen_header(
        frame,
        chunks[0],
        &format!("{}, {}", greeting(hour), session.first_name()),
        "What would you like to do today?",
        theme,
    );

    if theme.shows_progress() {
        render_progress(frame, chunks[1], theme);
    }
    render_stat_cards(frame, chunks[2], &DASHBOARD_STATS, theme);
    render_services(frame, chunks[3], state, theme);
    render_activity(frame, chunks[4], theme);
}

fn render_progress(frame: &mut Frame, area: Rect, theme: &Theme) {
    let progress = CITIZEN_PROGRESS;
    let ratio = f64::from(progress.xp) / f64::from(progress.next_level_xp);
    let label = format!(
        "Level {} · {} XP · {}-day streak 🔥",
        progress.level, progress.xp, progress.streak_days
    );
    let gauge = Gauge::default()
        .block(panel("Citizen Progress", theme, false))
        .gauge_style(
            Style::default()
                .fg(theme.colors.accent)
                .bg(theme.colors.surface),
        )
        .ratio(ratio.clamp(0.0, 1.0))
        .label(Span::styled(label, theme.value()));
    frame.render_widget(gauge, area);
}

fn render_services(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &Theme) {
    let block = panel("Quick Services", theme, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = SERVICES.len().div_ceil(GRID_COLUMNS) as u32;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows)))
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            let Some(service) = SERVICES.get(index) else {
                continue;
            };
            let selected = index == state.selected;
            let tint = theme.colors.card(index);
            let border = if selected {
                Style::default().fg(theme.colors.border_focused).bold()
            } else {
                Style::default().fg(tint)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if selected {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border);
            let marker = if selected { "▶ " } else { "" };
            let lines = vec![
                Line::styled(format!("{marker}{}", service.title), theme.value()),
                Line::styled(service.subtitle, theme.text_muted()),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), *cell);
        }
    }
}

fn render_activity(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines: Vec<Line> = RECENT_ACTIVITY
        .iter()
        .map(|activity| {
            Line::from(vec![
                StatusBadge::new(activity.status, activity.tone).indicator_span(theme),
                Span::raw(" "),
                Span::styled(activity.title, theme.text()),
                Span::raw("  "),
                StatusBadge::new(activity.status, activity.tone).to_span(theme),
                Span::styled(format!("  {}", activity.time), theme.text_muted()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(panel("Recent Activity", theme, false)),
        area,
    );
}
