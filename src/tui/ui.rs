//! Terminal setup, the main loop and the root renderer.

use super::app::App;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::tabbar::{render_tab_bar, TAB_BAR_HEIGHT};
use super::theme::{render_footer_hints, FooterHints};
use super::views;
use super::widgets::{check_terminal_size, render_size_warning};
use crate::error::{Result, TerminalContext};
use crate::model::Screen;
use chrono::Timelike;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use std::io::{stdout, Stdout};
use std::time::Instant;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI application until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run_tui(app: &mut App) -> Result<()> {
    let mut terminal = setup_terminal(app.mouse_enabled()).terminal_context("terminal setup")?;
    tracing::info!(theme = app.theme().name(), "starting terminal UI");

    let result = run_loop(&mut terminal, app);
    let restored = restore_terminal(&mut terminal, app.mouse_enabled());

    result.terminal_context("event loop")?;
    restored.terminal_context("terminal restore")
}

/// One reversible terminal mode change.
struct SetupStep<'a> {
    name: &'static str,
    apply: Box<dyn FnOnce() -> std::io::Result<()> + 'a>,
    undo: Box<dyn FnOnce() + 'a>,
}

/// Apply `steps` in order. If one fails, the steps already applied are undone
/// newest first and the failure is returned.
fn apply_steps<'a>(steps: Vec<SetupStep<'a>>) -> std::io::Result<()> {
    let mut applied: Vec<Box<dyn FnOnce() + 'a>> = Vec::with_capacity(steps.len());
    for step in steps {
        if let Err(e) = (step.apply)() {
            tracing::debug!(step = step.name, "terminal setup failed, rolling back");
            applied.into_iter().rev().for_each(|undo| undo());
            return Err(e);
        }
        applied.push(step.undo);
    }
    Ok(())
}

fn terminal_steps(mouse: bool) -> Vec<SetupStep<'static>> {
    let mut steps = vec![
        SetupStep {
            name: "raw mode",
            apply: Box::new(enable_raw_mode),
            undo: Box::new(|| {
                let _ = disable_raw_mode();
            }),
        },
        SetupStep {
            name: "alternate screen",
            apply: Box::new(|| execute!(stdout(), EnterAlternateScreen)),
            undo: Box::new(|| {
                let _ = execute!(stdout(), LeaveAlternateScreen);
            }),
        },
    ];
    if mouse {
        steps.push(SetupStep {
            name: "mouse capture",
            apply: Box::new(|| execute!(stdout(), EnableMouseCapture)),
            undo: Box::new(|| {
                let _ = execute!(stdout(), DisableMouseCapture);
            }),
        });
    }
    steps
}

fn setup_terminal(mouse: bool) -> std::io::Result<Tui> {
    apply_steps(terminal_steps(mouse))?;
    Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| {
        terminal_steps(mouse)
            .into_iter()
            .rev()
            .for_each(|step| (step.undo)());
        e
    })
}

fn restore_terminal(terminal: &mut Tui, mouse: bool) -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()
}

fn run_loop(terminal: &mut Tui, app: &mut App) -> std::io::Result<()> {
    let events = EventHandler::new(app.tick_rate_ms());

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(Instant::now()),
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Draw the whole UI for the current state.
///
/// Records where the tab bar went so clicks can be hit-tested against it.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let theme = app.theme;

    frame.render_widget(Block::default().style(theme.base()), area);

    if check_terminal_size(area.width, area.height).is_err() {
        app.tab_bar_area = None;
        render_size_warning(frame, area, &theme);
        return;
    }

    let show_tab_bar = app.router.tab_bar_visible();
    let tab_height = if show_tab_bar { TAB_BAR_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),            // Screen
            Constraint::Length(1),          // Status / footer hints
            Constraint::Length(tab_height), // Tab bar
        ])
        .split(area);

    let content = chunks[0].inner(Margin::new(1, 0));
    render_screen(frame, content, app);
    render_status_line(frame, chunks[1], app);

    if show_tab_bar {
        render_tab_bar(frame, chunks[2], &app.tab_bar, app.router.current_screen(), &theme);
        app.tab_bar_area = Some(chunks[2]);
    } else {
        app.tab_bar_area = None;
    }
}

/// Exhaustive dispatch from screen to renderer.
///
/// List renderers take their state mutably to keep the cursor scrolled into
/// view.
fn render_screen(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let screens = &mut app.screens;
    let session = app.router.session();
    match app.router.current_screen() {
        Screen::Onboarding => views::render_onboarding(frame, area, &screens.onboarding, theme),
        Screen::Auth => views::render_auth(frame, area, &screens.auth, theme),
        Screen::Dashboard => {
            let hour = chrono::Local::now().hour();
            views::render_dashboard(frame, area, &screens.dashboard, session, hour, theme);
        }
        Screen::Emergency => views::render_emergency(frame, area, &mut screens.emergency, theme),
        Screen::Complaints => views::render_complaints(frame, area, &mut screens.complaints, theme),
        Screen::Applications => {
            views::render_applications(frame, area, &mut screens.applications, theme);
        }
        Screen::Announcements => {
            views::render_announcements(frame, area, &mut screens.announcements, theme);
        }
        Screen::Notifications => {
            views::render_notifications(frame, area, &mut screens.notifications, theme);
        }
        Screen::Profile => views::render_profile(frame, area, &screens.profile, session, theme),
        Screen::QuickAction => {
            views::render_placeholder(frame, area, Screen::QuickAction.title(), theme);
        }
    }
}

/// Status message when there is one, otherwise the key hints.
fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = match app.status_message() {
        Some(msg) => Line::styled(
            format!(" {msg}"),
            Style::default().fg(theme.colors.info).bold(),
        ),
        None => {
            let hints =
                FooterHints::for_screen(app.router.current_screen(), app.router.tab_bar_visible());
            Line::from(render_footer_hints(theme, &hints))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;

    fn step<'a>(log: &'a RefCell<Vec<String>>, name: &'static str, fails: bool) -> SetupStep<'a> {
        SetupStep {
            name,
            apply: Box::new(move || {
                if fails {
                    return Err(io::Error::other(format!("{name} unsupported")));
                }
                log.borrow_mut().push(format!("enter {name}"));
                Ok(())
            }),
            undo: Box::new(move || log.borrow_mut().push(format!("leave {name}"))),
        }
    }

    #[test]
    fn test_failed_step_undoes_earlier_steps_in_reverse() {
        let log = RefCell::new(Vec::new());
        let steps = vec![
            step(&log, "raw", false),
            step(&log, "alternate", false),
            step(&log, "mouse", true),
        ];
        let err = apply_steps(steps).unwrap_err();
        assert_eq!(err.to_string(), "mouse unsupported");
        assert_eq!(
            *log.borrow(),
            ["enter raw", "enter alternate", "leave alternate", "leave raw"]
        );
    }

    #[test]
    fn test_first_step_failure_undoes_nothing() {
        let log = RefCell::new(Vec::new());
        let steps = vec![step(&log, "raw", true), step(&log, "alternate", false)];
        assert!(apply_steps(steps).is_err());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_successful_setup_keeps_every_step() {
        let log = RefCell::new(Vec::new());
        apply_steps(vec![step(&log, "raw", false), step(&log, "alternate", false)]).unwrap();
        assert_eq!(*log.borrow(), ["enter raw", "enter alternate"]);
    }

    #[test]
    fn test_mouse_capture_is_optional() {
        let names = |mouse| {
            terminal_steps(mouse)
                .iter()
                .map(|s| s.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(names(false), ["raw mode", "alternate screen"]);
        assert_eq!(names(true), ["raw mode", "alternate screen", "mouse capture"]);
    }
}
