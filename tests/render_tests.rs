//! Rendering tests against an in-memory terminal.
//!
//! Draws the full UI into a `TestBackend` and checks the buffer text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use janmitra::tui::{handle_key_event, render, ACTIVE_MARKER, MIN_HEIGHT, MIN_WIDTH};
use janmitra::{App, NavRequest, Screen, Session, Theme, ThemeKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 32;

fn draw(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_text(app: &mut App) -> String {
    draw(app, WIDTH, HEIGHT).join("\n")
}

fn signed_in(theme: Theme) -> App {
    let mut app = App::new(Session::new("Ravi Kumar"), theme);
    app.navigate(NavRequest::Login);
    app
}

fn press(app: &mut App, code: KeyCode) {
    handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
}

// =============================================================================
// Tab bar
// =============================================================================

mod tab_bar {
    use super::*;

    #[test]
    fn hidden_before_sign_in() {
        let mut app = App::default();
        let text = screen_text(&mut app);
        assert!(text.contains("Welcome to JanMitra"));
        assert!(!text.contains("Updates"));

        app.navigate(NavRequest::CompleteOnboarding);
        let text = screen_text(&mut app);
        assert!(!text.contains("Updates"));
    }

    #[test]
    fn hidden_on_pre_session_screen_while_signed_in() {
        let mut app = signed_in(Theme::default());
        app.navigate(NavRequest::Navigate(Screen::Auth));
        assert!(!screen_text(&mut app).contains("Updates"));
    }

    #[test]
    fn shown_after_sign_in_with_active_marker() {
        let mut app = signed_in(Theme::default());
        let text = screen_text(&mut app);
        assert!(text.contains(&format!("{ACTIVE_MARKER} Home")));
        assert!(text.contains("Services"));
        assert!(text.contains("Emergency"));
        assert!(text.contains("Updates"));

        app.navigate(NavRequest::Navigate(Screen::Profile));
        let text = screen_text(&mut app);
        assert!(text.contains(&format!("{ACTIVE_MARKER} Profile")));
        assert!(!text.contains(&format!("{ACTIVE_MARKER} Home")));
    }

    #[test]
    fn no_tab_active_on_announcements() {
        let mut app = signed_in(Theme::default());
        app.navigate(NavRequest::Navigate(Screen::Announcements));
        let lines = draw(&mut app, WIDTH, HEIGHT);
        let bar = lines[lines.len() - 2].clone();
        assert!(bar.contains("Home"));
        assert!(!bar.contains(ACTIVE_MARKER));
    }

    #[test]
    fn quick_action_variant_under_janmitra_theme() {
        let mut app = signed_in(Theme::new(ThemeKind::JanMitra, false));
        let text = screen_text(&mut app);
        assert!(text.contains("Quick"));
        assert!(text.contains("Citizen Progress"));

        app.navigate(NavRequest::Navigate(Screen::QuickAction));
        let text = screen_text(&mut app);
        assert!(text.contains(&format!("{ACTIVE_MARKER} Quick")));
        assert!(text.contains("coming soon"));
    }

    #[test]
    fn disappears_after_logout() {
        let mut app = signed_in(Theme::default());
        assert!(screen_text(&mut app).contains("Updates"));
        app.navigate(NavRequest::Logout);
        assert!(!screen_text(&mut app).contains("Updates"));
    }

    #[test]
    fn labels_stay_apart_at_minimum_width() {
        let mut app = signed_in(Theme::default());
        app.navigate(NavRequest::Navigate(Screen::Emergency));
        let lines = draw(&mut app, MIN_WIDTH, MIN_HEIGHT);
        let bar = lines[lines.len() - 2].trim_matches('│').to_string();

        assert!(!bar.contains("EmergencyUpdates"));
        assert!(bar.contains(ACTIVE_MARKER));
        assert!(bar.contains("Updates"));
        let labels = ["Home", "Services", "Emerg", "Updates", "Profile"];
        for word in bar.split_whitespace().filter(|w| *w != ACTIVE_MARKER) {
            let known = labels.iter().any(|label| word.starts_with(label))
                || word.chars().all(|c| c.is_ascii_digit());
            assert!(known, "unexpected '{word}' in {bar:?}");
        }
    }
}

// =============================================================================
// Screens
// =============================================================================

mod screens {
    use super::*;

    #[test]
    fn every_screen_renders_without_panic() {
        for kind in ThemeKind::ALL {
            for dark in [false, true] {
                for screen in Screen::ALL {
                    let mut app = signed_in(Theme::new(kind, dark));
                    app.navigate(NavRequest::Navigate(screen));
                    let text = screen_text(&mut app);
                    assert!(!text.trim().is_empty(), "{screen} in {kind}");
                }
            }
        }
    }

    #[test]
    fn every_screen_survives_minimum_size() {
        for screen in Screen::ALL {
            let mut app = signed_in(Theme::default());
            app.navigate(NavRequest::Navigate(screen));
            let text = draw(&mut app, MIN_WIDTH, MIN_HEIGHT).join("\n");
            assert!(!text.contains("Terminal too small"), "{screen}");
        }
    }

    #[test]
    fn dashboard_greets_by_first_name() {
        let mut app = signed_in(Theme::default());
        let text = screen_text(&mut app);
        assert!(text.contains(", Ravi"));
        assert!(text.contains("Quick Services"));
    }

    #[test]
    fn headers_match_screen() {
        let cases = [
            (Screen::Emergency, "Emergency Services"),
            (Screen::Complaints, "Complaints"),
            (Screen::Notifications, "Notifications"),
        ];
        for (screen, header) in cases {
            let mut app = signed_in(Theme::default());
            app.navigate(NavRequest::Navigate(screen));
            assert!(screen_text(&mut app).contains(header), "{screen}");
        }
    }

    #[test]
    fn emergency_call_banner() {
        let mut app = signed_in(Theme::default());
        app.navigate(NavRequest::Navigate(Screen::Emergency));
        press(&mut app, KeyCode::Char('s'));
        let text = screen_text(&mut app);
        assert!(text.contains("Calling Emergency SOS (112)"));
    }

    #[test]
    fn auth_masks_password() {
        let mut app = App::default();
        app.navigate(NavRequest::CompleteOnboarding);
        // Focus moves phone -> password
        press(&mut app, KeyCode::Tab);
        for c in "secret".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let text = screen_text(&mut app);
        assert!(!text.contains("secret"));
        assert!(text.contains("••••••"));
    }

    #[test]
    fn status_message_replaces_footer() {
        let mut app = signed_in(Theme::default());
        press(&mut app, KeyCode::Char('t'));
        assert!(screen_text(&mut app).contains("Theme: soft"));
    }
}

// =============================================================================
// Terminal size
// =============================================================================

mod size {
    use super::*;

    #[test]
    fn too_small_shows_warning_and_no_tab_bar() {
        let mut app = signed_in(Theme::default());
        let text = draw(&mut app, MIN_WIDTH - 1, MIN_HEIGHT).join("\n");
        assert!(text.contains("Terminal too small"));
        assert!(!text.contains("Updates"));
    }

    #[test]
    fn too_short_shows_warning() {
        let mut app = App::default();
        let text = draw(&mut app, WIDTH, MIN_HEIGHT - 1).join("\n");
        assert!(text.contains("Terminal too small"));
    }
}

// =============================================================================
// Scrolling at the minimum size
// =============================================================================

mod scrolling {
    use super::*;

    fn min_size_text(app: &mut App) -> String {
        draw(app, MIN_WIDTH, MIN_HEIGHT).join("\n")
    }

    fn open_and_move(screen: Screen, downs: usize) -> App {
        let mut app = signed_in(Theme::default());
        app.navigate(NavRequest::Navigate(screen));
        for _ in 0..downs {
            press(&mut app, KeyCode::Down);
        }
        app
    }

    #[test]
    fn last_application_is_drawn() {
        let mut app = open_and_move(Screen::Applications, 3);
        assert!(min_size_text(&mut app).contains("▶ Marriage Certificate"));

        for _ in 0..3 {
            press(&mut app, KeyCode::Up);
        }
        assert!(min_size_text(&mut app).contains("▶ Birth Certificate"));
    }

    #[test]
    fn last_helpline_is_drawn() {
        let mut app = open_and_move(Screen::Emergency, 6);
        let text = min_size_text(&mut app);
        assert!(text.contains("▶ Disaster Help"));
        assert!(text.contains("1070"));
    }

    #[test]
    fn first_contact_keeps_its_heading_after_scrolling_back() {
        let mut app = open_and_move(Screen::Emergency, 6);
        min_size_text(&mut app);
        for _ in 0..6 {
            press(&mut app, KeyCode::Up);
        }
        let text = min_size_text(&mut app);
        assert!(text.contains("Primary"));
        assert!(text.contains("▶ Police"));
    }

    #[test]
    fn last_announcement_is_drawn() {
        let mut app = open_and_move(Screen::Announcements, 5);
        assert!(min_size_text(&mut app).contains("▶ Public Library Extended Hours"));
    }

    #[test]
    fn last_notification_and_complaint_are_drawn() {
        let mut app = open_and_move(Screen::Notifications, 4);
        assert!(min_size_text(&mut app).contains("▶ ★ Milestone Reached"));

        let mut app = open_and_move(Screen::Complaints, 2);
        assert!(min_size_text(&mut app).contains("▶ Noise Complaint"));
    }

    #[test]
    fn focused_complaint_field_is_drawn() {
        let mut app = signed_in(Theme::default());
        app.navigate(NavRequest::Navigate(Screen::Complaints));
        press(&mut app, KeyCode::Char('n'));
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        let text = min_size_text(&mut app);
        assert!(text.contains("Priority"));
        assert!(text.contains("submit"));
    }
}
