//! Sign-in / sign-up form.

use crate::content::APP_NAME;
use crate::tui::app_states::{AuthMode, AuthState};
use crate::tui::theme::Theme;
use crate::tui::widgets::{centered_rect, filter_tabs_line, panel};
use ratatui::{prelude::*, widgets::Paragraph};

pub fn render_auth(frame: &mut Frame, area: Rect, state: &AuthState, theme: &Theme) {
    let card = centered_rect(70, 90, area);
    let block = panel(APP_NAME, theme, true).title_alignment(Alignment::Center);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let fields = state.mode.fields();
    let mut constraints = vec![
        Constraint::Length(2), // Welcome line
        Constraint::Length(2), // Mode tabs
    ];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(2)); // Submit
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let welcome = match state.mode {
        AuthMode::SignIn => "Welcome back! Sign in to continue",
        AuthMode::SignUp => "Create your account to get started",
    };
    frame.render_widget(
        Paragraph::new(Line::styled(welcome, theme.text_muted())).alignment(Alignment::Center),
        chunks[0],
    );

    let active = usize::from(state.mode == AuthMode::SignUp);
    frame.render_widget(
        Paragraph::new(filter_tabs_line(
            &[AuthMode::SignIn.label(), AuthMode::SignUp.label()],
            active,
            theme,
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );

    for (field, chunk) in fields.iter().zip(chunks.iter().skip(2)) {
        let focused = *field == state.focus;
        let value = state.display_value(*field);
        let line = if value.is_empty() {
            Line::styled(field.placeholder(), theme.text_muted().italic())
        } else if focused {
            Line::from(vec![
                Span::styled(value, theme.text()),
                Span::styled("▏", Style::default().fg(theme.colors.primary)),
            ])
        } else {
            Line::styled(value, theme.text())
        };
        frame.render_widget(
            Paragraph::new(line).block(panel(field.label(), theme, focused)),
            *chunk,
        );
    }

    let submit_chunk = chunks[2 + fields.len()];
    let reveal = if state.show_password { "hide" } else { "show" };
    let submit = Line::from(vec![
        Span::styled("[Enter] ", theme.shortcut_key()),
        Span::styled(state.mode.label(), theme.value()),
        Span::styled(format!("   [^P] {reveal} password"), theme.text_muted()),
    ]);
    frame.render_widget(
        Paragraph::new(submit).alignment(Alignment::Center),
        submit_chunk,
    );
}
