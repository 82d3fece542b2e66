//! City announcements, urgent ones first.

use crate::content::{other_announcements, urgent_announcements, Announcement};
use crate::tui::app_states::AnnouncementsState;
use crate::tui::theme::Theme;
use crate::tui::widgets::{panel, render_screen_header, row_style, StatusBadge};
use ratatui::{prelude::*, widgets::Paragraph};

pub fn render_announcements(
    frame: &mut Frame,
    area: Rect,
    state: &mut AnnouncementsState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(area);

    render_screen_header(
        frame,
        chunks[0],
        "City Announcements",
        "Latest news and updates from your city",
        theme,
    );

    let urgent: Vec<_> = urgent_announcements().collect();
    let ordered = urgent
        .iter()
        .copied()
        .map(|a| (a, true))
        .chain(other_announcements().map(|a| (a, false)));

    let mut lines = Vec::new();
    let mut cursor = (0, 0);
    for (index, (announcement, is_urgent)) in ordered.enumerate() {
        let first = lines.len();
        if index == 0 && is_urgent {
            lines.push(Line::styled(
                "⚠ Urgent",
                Style::default().fg(theme.colors.error).bold(),
            ));
        }
        if index == urgent.len() {
            lines.push(Line::styled("Recent", theme.title()));
        }
        let selected = index == state.list.selected;
        push_announcement(&mut lines, announcement, selected, theme);
        if selected {
            cursor = (first, lines.len() - 1);
        }
    }

    let height = chunks[1].height.saturating_sub(2) as usize;
    let offset = state.list.scroll_to(cursor.0, cursor.1, height);
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Announcements", theme, true))
            .scroll((offset as u16, 0)),
        chunks[1],
    );
}

fn push_announcement(
    lines: &mut Vec<Line<'static>>,
    a: &Announcement,
    selected: bool,
    theme: &Theme,
) {
    let style = row_style(selected, theme);
    let mut title = vec![
        Span::styled(if selected { "▶ " } else { "  " }, style),
        Span::styled(a.title, style.bold()),
        Span::raw(" "),
        StatusBadge::new(a.category, a.kind.tone()).to_span(theme),
    ];
    if a.is_new {
        title.push(Span::styled(
            " NEW",
            Style::default().fg(theme.colors.accent).bold(),
        ));
    }
    lines.push(Line::from(title));
    lines.push(Line::styled(format!("    {}", a.description), theme.text()));

    let mut meta = format!("    {} ", a.date);
    if let Some(time) = a.time {
        meta.push_str(&format!("{time} "));
    }
    meta.push_str(&format!("· {}", a.location));
    if let Some(link) = a.link {
        meta.push_str(&format!(" · {link}"));
    }
    lines.push(Line::styled(meta, theme.text_muted()));
}
