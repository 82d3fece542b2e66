//! Shared widgets and layout helpers for the screen renderers.

mod badge;

pub use badge::StatusBadge;

use crate::content::StatCard;
use crate::tui::theme::Theme;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Bordered panel with a themed title.
pub fn panel<'a>(title: &'a str, theme: &Theme, focused: bool) -> Block<'a> {
    let border = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(Span::styled(format!(" {title} "), theme.title()))
}

/// Title line plus a muted subtitle, used at the top of every screen.
pub fn render_screen_header(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    subtitle: &str,
    theme: &Theme,
) {
    let lines = vec![
        Line::styled(title.to_string(), theme.title()),
        Line::styled(subtitle.to_string(), theme.text_muted()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Row of stat cards sharing `area` equally.
pub fn render_stat_cards(frame: &mut Frame, area: Rect, cards: &[StatCard], theme: &Theme) {
    if cards.is_empty() {
        return;
    }
    let count = cards.len() as u32;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (index, (card, chunk)) in cards.iter().zip(chunks.iter()).enumerate() {
        let tint = theme.colors.card(index);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(tint));
        let lines = vec![
            Line::styled(card.value, Style::default().fg(theme.colors.primary).bold()),
            Line::styled(card.title, theme.text()),
            Line::styled(card.subtitle, theme.text_muted()),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            *chunk,
        );
    }
}

/// Filter tabs as one line, with the active label highlighted.
pub fn filter_tabs_line(labels: &[&str], active: usize, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", theme.text_muted()));
        }
        if i == active {
            spans.push(Span::styled(
                format!("[{label}]"),
                Style::default()
                    .fg(theme.colors.tab_active_fg)
                    .bg(theme.colors.tab_active_bg)
                    .bold(),
            ));
        } else {
            spans.push(Span::styled(format!(" {label} "), theme.text_muted()));
        }
    }
    Line::from(spans)
}

/// Style for a list row, highlighted when selected.
pub fn row_style(selected: bool, theme: &Theme) -> Style {
    if selected {
        theme.selected()
    } else {
        theme.text()
    }
}

/// Placeholder for a list with nothing to show.
pub fn render_empty_state(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    hint: Option<&str>,
    theme: &Theme,
) {
    let hint_lines = hint
        .into_iter()
        .flat_map(|h| [Line::default(), Line::styled(h.to_string(), theme.text_muted().italic())]);
    let lines: Vec<Line> = [Line::default(), Line::styled(message.to_string(), theme.text())]
        .into_iter()
        .chain(hint_lines)
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border());
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Middle `percent_x` by `percent_y` of `outer`.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let scale =
        |len: u16, percent: u16| (u32::from(len) * u32::from(percent.min(100)) / 100) as u16;
    let width = scale(outer.width, percent_x);
    let height = scale(outer.height, percent_y);
    let x = outer.x + (outer.width - width) / 2;
    let y = outer.y + (outer.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate to `max_width` display columns, ending in `...` when cut.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let (budget, suffix) = if max_width > 3 {
        (max_width - 3, "...")
    } else {
        (max_width, "")
    };
    let mut width = 0;
    let mut truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    truncated.push_str(suffix);
    truncated
}

// ============================================================================
// Terminal size
// ============================================================================

/// Smallest terminal the two-column dashboard and tab bar fit in.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// `Err((min_width, min_height))` when the terminal is too small.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    let fits = width >= MIN_WIDTH && height >= MIN_HEIGHT;
    if fits {
        Ok(())
    } else {
        Err((MIN_WIDTH, MIN_HEIGHT))
    }
}

/// Replaces the whole UI until the terminal is resized.
pub fn render_size_warning(frame: &mut Frame, area: Rect, theme: &Theme) {
    let warning = Style::default().fg(theme.colors.warning);
    let size_line = |label: &'static str, value: String, style: Style| {
        Line::from(vec![Span::raw(label), Span::styled(value, style)])
    };

    let text = Text::from(vec![
        Line::styled("Terminal too small", warning.bold()),
        Line::default(),
        size_line("Now: ", format!("{}x{}", area.width, area.height), theme.text()),
        size_line(
            "Needs: ",
            format!("{MIN_WIDTH}x{MIN_HEIGHT}"),
            Style::default().fg(theme.colors.accent),
        ),
        Line::default(),
        Line::styled("Please resize your terminal", theme.text_muted()),
    ]);

    let block = Block::default().borders(Borders::ALL).border_style(warning);
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
