use crate::router::NavRequest;
use crate::tui::app_states::OnboardingState;
use crate::tui::traits::EventResult;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_onboarding_key(state: &mut OnboardingState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => {
            state.next();
            EventResult::Consumed
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.prev();
            EventResult::Consumed
        }
        KeyCode::Enter | KeyCode::Char(' ') => state.confirm().into(),
        KeyCode::Char('s') => EventResult::navigate(NavRequest::CompleteOnboarding),
        _ => EventResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::events::test_keys::{ch, key};

    #[test]
    fn test_arrows_move_slides() {
        let mut state = OnboardingState::new();
        handle_onboarding_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.slide, 1);
        handle_onboarding_key(&mut state, key(KeyCode::Left));
        assert_eq!(state.slide, 0);
    }

    #[test]
    fn test_enter_on_last_slide_completes() {
        let mut state = OnboardingState::new();
        state.slide = 2;
        assert_eq!(
            handle_onboarding_key(&mut state, key(KeyCode::Enter)),
            EventResult::Navigate(NavRequest::CompleteOnboarding)
        );
    }

    #[test]
    fn test_skip() {
        let mut state = OnboardingState::new();
        assert_eq!(
            handle_onboarding_key(&mut state, ch('s')),
            EventResult::Navigate(NavRequest::CompleteOnboarding)
        );
        assert_eq!(handle_onboarding_key(&mut state, ch('q')), EventResult::Ignored);
    }
}
