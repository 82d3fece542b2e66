//! Complaint list and the new-complaint form.

use crate::content::COMPLAINTS;
use crate::tui::app_states::{ComplaintField, ComplaintForm, ComplaintsState};
use crate::tui::theme::Theme;
use crate::tui::widgets::{panel, render_screen_header, row_style, truncate_str, StatusBadge};
use ratatui::{prelude::*, widgets::Paragraph};

pub fn render_complaints(
    frame: &mut Frame,
    area: Rect,
    state: &mut ComplaintsState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(area);

    render_screen_header(
        frame,
        chunks[0],
        "Complaints",
        "Report civic issues and track their resolution",
        theme,
    );

    if let Some(form) = &state.form {
        render_form(frame, chunks[1], form, theme);
    } else {
        render_list(frame, chunks[1], state, theme);
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &mut ComplaintsState, theme: &Theme) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = Vec::new();
    let mut cursor = (0, 0);
    for (index, complaint) in COMPLAINTS.iter().enumerate() {
        let selected = index == state.list.selected;
        let first = lines.len();
        let style = row_style(selected, theme);
        lines.push(Line::from(vec![
            Span::styled(if selected { "▶ " } else { "  " }, style),
            Span::styled(complaint.title, style.bold()),
            Span::raw(" "),
            StatusBadge::new(complaint.status.label(), complaint.status.tone()).to_span(theme),
            Span::raw(" "),
            StatusBadge::new(complaint.priority.label(), complaint.priority.tone()).to_span(theme),
        ]));
        lines.push(Line::styled(
            truncate_str(
                &format!(
                    "    {} · {} · {} · {}",
                    complaint.id, complaint.category, complaint.location, complaint.date
                ),
                width,
            ),
            theme.text_muted(),
        ));
        if selected {
            cursor = (first, lines.len() - 1);
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[n] ", theme.shortcut_key()),
        Span::styled("File a new complaint", theme.text()),
    ]));

    let height = area.height.saturating_sub(2) as usize;
    let offset = state.list.scroll_to(cursor.0, cursor.1, height);
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("My Complaints", theme, true))
            .scroll((offset as u16, 0)),
        area,
    );
}

fn render_form(frame: &mut Frame, area: Rect, form: &ComplaintForm, theme: &Theme) {
    let block = panel("New Complaint", theme, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form_window(form.focus, inner.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

    for (field, chunk) in fields.iter().zip(chunks.iter()) {
        let focused = *field == form.focus;
        let value = form.value(*field);
        let line = if field.is_picker() {
            Line::from(vec![
                Span::styled("◀ ", theme.text_muted()),
                Span::styled(value.to_string(), theme.value()),
                Span::styled(" ▶", theme.text_muted()),
            ])
        } else if value.is_empty() {
            Line::styled(
                format!("Enter {}", field.label().to_lowercase()),
                theme.text_muted().italic(),
            )
        } else {
            Line::styled(value.to_string(), theme.text())
        };
        frame.render_widget(
            Paragraph::new(line).block(panel(field.label(), theme, focused)),
            *chunk,
        );
    }

    if let Some(footer) = chunks.get(fields.len()) {
        let action = if form.is_last_field() { "submit" } else { "next field" };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[Enter] ", theme.shortcut_key()),
                Span::styled(action, theme.text()),
                Span::styled("  [Esc] ", theme.shortcut_key()),
                Span::styled("cancel", theme.text()),
            ])),
            *footer,
        );
    }
}

const FIELD_HEIGHT: u16 = 3;

/// The run of form fields that fits in `height` rows (one row kept for the
/// key hints), always including the focused field.
fn form_window(focus: ComplaintField, height: u16) -> &'static [ComplaintField] {
    let all: &'static [ComplaintField; 5] = &ComplaintField::ALL;
    let fit = (height.saturating_sub(1) / FIELD_HEIGHT).max(1) as usize;
    if fit >= all.len() {
        return all;
    }
    let focused = all.iter().position(|f| *f == focus).unwrap_or(0);
    let start = (focused + 1).saturating_sub(fit);
    &all[start..start + fit]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_window_shows_everything_when_tall() {
        assert_eq!(form_window(ComplaintField::Priority, 40).len(), 5);
    }

    #[test]
    fn test_form_window_follows_focus() {
        // Four fields fit in 13 rows
        let top = form_window(ComplaintField::Category, 13);
        assert_eq!(top.len(), 4);
        assert_eq!(top[0], ComplaintField::Category);

        let bottom = form_window(ComplaintField::Priority, 13);
        assert_eq!(bottom.first(), Some(&ComplaintField::Title));
        assert_eq!(bottom.last(), Some(&ComplaintField::Priority));
    }

    #[test]
    fn test_form_window_never_empty() {
        assert_eq!(form_window(ComplaintField::Location, 2), &[ComplaintField::Location]);
    }
}
