//! Notifications with filter tabs and read state.

use crate::content::{
    NotificationFilter, NotificationKind, NOTIFICATIONS, NOTIFICATIONS_THIS_WEEK,
};
use crate::tui::app_states::NotificationsState;
use crate::tui::theme::Theme;
use crate::tui::widgets::{
    filter_tabs_line, panel, render_empty_state, render_screen_header, row_style,
};
use ratatui::{prelude::*, widgets::Paragraph};

const fn kind_glyph(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Update => "↻",
        NotificationKind::Reminder => "⏰",
        NotificationKind::City => "🏙",
        NotificationKind::Achievement => "★",
    }
}

pub fn render_notifications(
    frame: &mut Frame,
    area: Rect,
    state: &mut NotificationsState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(1), // Stats
            Constraint::Length(1), // Filter tabs
            Constraint::Min(5),    // List
        ])
        .split(area);

    render_screen_header(
        frame,
        chunks[0],
        "Notifications",
        "Stay updated with your activity",
        theme,
    );

    let unread = NOTIFICATIONS.iter().filter(|n| state.is_unread(n)).count();
    let stats = Line::from(vec![
        Span::styled(format!("Total {}", NOTIFICATIONS.len()), theme.value()),
        Span::styled("  │  ", theme.text_muted()),
        Span::styled(
            format!("New {unread}"),
            Style::default().fg(theme.colors.accent).bold(),
        ),
        Span::styled("  │  ", theme.text_muted()),
        Span::styled(format!("This Week {NOTIFICATIONS_THIS_WEEK}"), theme.value()),
    ]);
    frame.render_widget(Paragraph::new(stats), chunks[1]);

    let labels: Vec<&str> = NotificationFilter::ALL.iter().map(|f| f.label()).collect();
    let active = NotificationFilter::ALL
        .iter()
        .position(|f| *f == state.filter)
        .unwrap_or(0);
    frame.render_widget(
        Paragraph::new(filter_tabs_line(&labels, active, theme)),
        chunks[2],
    );

    let visible = state.visible();
    if visible.is_empty() {
        render_empty_state(frame, chunks[3], "You're all caught up", None, theme);
        return;
    }

    let mut lines = Vec::new();
    let mut cursor = (0, 0);
    for (index, n) in visible.iter().enumerate() {
        let selected = index == state.list.selected;
        let first = lines.len();
        let style = row_style(selected, theme);
        let mut title = vec![
            Span::styled(if selected { "▶ " } else { "  " }, style),
            Span::styled(
                format!("{} ", kind_glyph(n.kind)),
                Style::default().fg(theme.colors.primary),
            ),
            Span::styled(n.title, style.bold()),
        ];
        if state.is_unread(n) {
            title.push(Span::styled(" ●", Style::default().fg(theme.colors.accent).bold()));
        }
        title.push(Span::styled(format!("  {}", n.time), theme.text_muted()));
        lines.push(Line::from(title));

        let mut message = vec![Span::styled(format!("    {}", n.message), theme.text())];
        if let Some(action) = n.action_label {
            message.push(Span::styled(format!("  [{action}]"), theme.shortcut_key()));
        }
        lines.push(Line::from(message));
        if selected {
            cursor = (first, lines.len() - 1);
        }
    }

    let height = chunks[3].height.saturating_sub(2) as usize;
    let offset = state.list.scroll_to(cursor.0, cursor.1, height);
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Recent", theme, true))
            .scroll((offset as u16, 0)),
        chunks[3],
    );
}
