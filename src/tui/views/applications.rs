//! Applications with status filter and quick services.

use crate::content::{ApplicationFilter, QUICK_SERVICES};
use crate::tui::app_states::ApplicationsState;
use crate::tui::theme::Theme;
use crate::tui::widgets::{
    filter_tabs_line, panel, render_empty_state, render_screen_header, row_style, StatusBadge,
};
use ratatui::{prelude::*, widgets::Paragraph};

pub fn render_applications(
    frame: &mut Frame,
    area: Rect,
    state: &mut ApplicationsState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(1), // Filter tabs
            Constraint::Min(6),    // Applications
            Constraint::Length(6), // Quick services
        ])
        .split(area);

    render_screen_header(
        frame,
        chunks[0],
        "Applications",
        "Track your certificates and documents",
        theme,
    );

    let labels: Vec<&str> = ApplicationFilter::ALL.iter().map(|f| f.label()).collect();
    let active = ApplicationFilter::ALL
        .iter()
        .position(|f| *f == state.filter)
        .unwrap_or(0);
    frame.render_widget(
        Paragraph::new(filter_tabs_line(&labels, active, theme)),
        chunks[1],
    );

    let visible = state.visible();
    if visible.is_empty() {
        render_empty_state(
            frame,
            chunks[2],
            "No applications here",
            Some("Try another filter"),
            theme,
        );
    } else {
        let mut lines = Vec::new();
        let mut cursor = (0, 0);
        for (index, app) in visible.iter().enumerate() {
            let selected = index == state.list.selected;
            let first = lines.len();
            let style = row_style(selected, theme);
            lines.push(Line::from(vec![
                Span::styled(if selected { "▶ " } else { "  " }, style),
                Span::styled(app.title, style.bold()),
                Span::raw(" "),
                StatusBadge::new(app.status.label(), app.status.tone()).to_span(theme),
                Span::styled(
                    if app.can_download { "  ⬇ download" } else { "" },
                    Style::default().fg(theme.colors.success),
                ),
            ]));
            lines.push(Line::styled(
                format!(
                    "    {} · {} · submitted {} · updated {} · ETA {} · fee {}",
                    app.id,
                    app.kind,
                    app.submitted,
                    app.last_update,
                    app.estimated_completion,
                    app.fee
                ),
                theme.text_muted(),
            ));
            if selected {
                cursor = (first, lines.len() - 1);
            }
        }
        let height = chunks[2].height.saturating_sub(2) as usize;
        let offset = state.list.scroll_to(cursor.0, cursor.1, height);
        frame.render_widget(
            Paragraph::new(lines)
                .block(panel("My Applications", theme, true))
                .scroll((offset as u16, 0)),
            chunks[2],
        );
    }

    let services: Vec<Line> = QUICK_SERVICES
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(format!("+ {}", s.title), theme.value()),
                Span::styled(format!("  {}", s.description), theme.text_muted()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(services).block(panel("Quick Services", theme, false)),
        chunks[3],
    );
}
