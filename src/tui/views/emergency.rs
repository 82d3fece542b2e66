//! Emergency contacts with a simulated call banner.

use crate::content::{dialable_contacts, EMERGENCY_CONTACTS, SOS_NUMBER};
use crate::tui::app_states::EmergencyState;
use crate::tui::state::ListNavigation;
use crate::tui::theme::Theme;
use crate::tui::widgets::{panel, render_screen_header, row_style};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub fn render_emergency(
    frame: &mut Frame,
    area: Rect,
    state: &mut EmergencyState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(4), // SOS panel / call banner
            Constraint::Min(5),    // Contacts
        ])
        .split(area);

    render_screen_header(
        frame,
        chunks[0],
        "Emergency Services",
        "Help is one key away, 24/7",
        theme,
    );
    render_sos(frame, chunks[1], state, theme);
    render_contacts(frame, chunks[2], state, theme);
}

fn render_sos(frame: &mut Frame, area: Rect, state: &EmergencyState, theme: &Theme) {
    let error = theme.colors.error;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(error).bold());

    let lines = match state.active_call {
        Some(call) => vec![
            Line::styled(
                format!("📞 Calling {} ({})...", call.service, call.number),
                Style::default().fg(error).bold(),
            ),
            Line::styled("Stay calm. Help is on the way.", theme.text_muted()),
        ],
        None => vec![
            Line::from(vec![
                Span::styled(format!("SOS {SOS_NUMBER}"), Style::default().fg(error).bold()),
                Span::styled("  press ", theme.text_muted()),
                Span::styled("[s]", theme.shortcut_key()),
                Span::styled(" for immediate help", theme.text_muted()),
            ]),
            Line::styled("Unified emergency number for all services", theme.text_muted()),
        ],
    };
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}

fn render_contacts(frame: &mut Frame, area: Rect, state: &mut EmergencyState, theme: &Theme) {
    let mut lines = Vec::new();
    let mut cursor = (0, 0);
    for (index, contact) in dialable_contacts().enumerate() {
        // A section heading scrolls in with the contact below it
        let first = lines.len();
        if index == 0 {
            lines.push(Line::styled("Primary", theme.title()));
        } else if index == EMERGENCY_CONTACTS.len() {
            lines.push(Line::styled("Helplines", theme.title()));
        }
        let selected = index == state.selected();
        let style = row_style(selected, theme);
        let marker = if selected { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{:<18}", contact.service), style),
            Span::styled(
                format!("{:>6}", contact.number),
                Style::default().fg(theme.colors.error).bold(),
            ),
            Span::styled(format!("  {}", contact.description), theme.text_muted()),
        ]));
        if selected {
            cursor = (first, lines.len() - 1);
        }
    }
    let height = area.height.saturating_sub(2) as usize;
    let offset = state.list.scroll_to(cursor.0, cursor.1, height);
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Contacts", theme, true))
            .scroll((offset as u16, 0)),
        area,
    );
}
