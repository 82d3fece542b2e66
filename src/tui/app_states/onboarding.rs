//! Onboarding slide position.

use crate::content::{Slide, SLIDES};
use crate::router::NavRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingState {
    pub slide: usize,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> &'static Slide {
        &SLIDES[self.slide.min(SLIDES.len() - 1)]
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.slide + 1 >= SLIDES.len()
    }

    /// Advance one slide. Stays put on the last one.
    pub fn next(&mut self) {
        if !self.is_last() {
            self.slide += 1;
        }
    }

    pub fn prev(&mut self) {
        self.slide = self.slide.saturating_sub(1);
    }

    /// `Enter`: advance, or finish on the last slide.
    pub fn confirm(&mut self) -> Option<NavRequest> {
        if self.is_last() {
            Some(NavRequest::CompleteOnboarding)
        } else {
            self.next();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_walks_then_completes() {
        let mut state = OnboardingState::new();
        assert_eq!(state.confirm(), None);
        assert_eq!(state.confirm(), None);
        assert!(state.is_last());
        assert_eq!(state.confirm(), Some(NavRequest::CompleteOnboarding));
        assert_eq!(state.current().title, SLIDES[2].title);
    }

    #[test]
    fn test_next_and_prev_saturate() {
        let mut state = OnboardingState::new();
        state.prev();
        assert_eq!(state.slide, 0);
        for _ in 0..5 {
            state.next();
        }
        assert_eq!(state.slide, SLIDES.len() - 1);
    }
}
