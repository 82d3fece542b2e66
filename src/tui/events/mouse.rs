//! Mouse event handlers.

use super::handle_key_event;
use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    match mouse.kind {
        // Scrolling behaves like the arrow keys on the current screen
        MouseEventKind::ScrollUp => {
            handle_key_event(app, KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        }
        MouseEventKind::ScrollDown => {
            handle_key_event(app, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        MouseEventKind::Down(MouseButton::Left) => {
            // Clear status message on click
            app.clear_status_message();

            if !app.router.tab_bar_visible() {
                return;
            }
            let Some(area) = app.tab_bar_area else {
                return;
            };
            if let Some(request) = app.tab_bar.hit_test(area, mouse.column, mouse.row) {
                app.navigate(request);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Screen;
    use crate::router::NavRequest;
    use crate::tui::tabbar::TAB_BAR_HEIGHT;
    use ratatui::layout::Rect;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_bar() -> (App, Rect) {
        let mut app = App::default();
        app.navigate(NavRequest::Login);
        let area = Rect::new(0, 27, 100, TAB_BAR_HEIGHT);
        app.tab_bar_area = Some(area);
        (app, area)
    }

    #[test]
    fn test_click_on_tab_navigates() {
        let (mut app, area) = app_with_bar();
        let cell = app.tab_bar.cell_areas(area)[4];
        handle_mouse_event(&mut app, click(cell.x + 1, cell.y));
        assert_eq!(app.current_screen(), Screen::Profile);
    }

    #[test]
    fn test_click_outside_bar_does_nothing() {
        let (mut app, _) = app_with_bar();
        handle_mouse_event(&mut app, click(5, 3));
        assert_eq!(app.current_screen(), Screen::Dashboard);
    }

    #[test]
    fn test_mouse_disabled() {
        let (mut app, area) = app_with_bar();
        app.mouse_enabled = false;
        let cell = app.tab_bar.cell_areas(area)[4];
        handle_mouse_event(&mut app, click(cell.x, cell.y));
        assert_eq!(app.current_screen(), Screen::Dashboard);
    }

    #[test]
    fn test_click_ignored_when_bar_hidden() {
        let (mut app, area) = app_with_bar();
        app.navigate(NavRequest::Logout);
        let cell = app.tab_bar.cell_areas(area)[4];
        handle_mouse_event(&mut app, click(cell.x, cell.y));
        assert_eq!(app.current_screen(), Screen::Onboarding);
    }
}
