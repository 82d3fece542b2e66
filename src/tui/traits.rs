//! Result type shared by the screen key handlers.
//!
//! Screens are leaves: a handler may change its own screen-local state, but
//! anything that touches the router goes back up as an [`EventResult`] and is
//! applied by the [`App`](super::App).

use crate::router::NavRequest;

/// Result of handling an event on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled by this screen
    Consumed,
    /// Event was not handled, let the global keys process it
    Ignored,
    /// Ask the router for a transition
    Navigate(NavRequest),
    /// Set a status message
    StatusMessage(String),
}

impl EventResult {
    /// Create a status message result
    pub fn status(msg: impl Into<String>) -> Self {
        Self::StatusMessage(msg.into())
    }

    /// Create a navigation result
    pub const fn navigate(request: NavRequest) -> Self {
        Self::Navigate(request)
    }

    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl From<NavRequest> for EventResult {
    fn from(request: NavRequest) -> Self {
        Self::Navigate(request)
    }
}

impl From<Option<NavRequest>> for EventResult {
    fn from(request: Option<NavRequest>) -> Self {
        request.map_or(Self::Consumed, Self::Navigate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Screen;

    #[test]
    fn test_consumed() {
        assert!(EventResult::Consumed.is_consumed());
        assert!(EventResult::status("hi").is_consumed());
        assert!(!EventResult::Ignored.is_consumed());
    }

    #[test]
    fn test_from_optional_request() {
        assert_eq!(EventResult::from(None), EventResult::Consumed);
        let request = NavRequest::Navigate(Screen::Profile);
        assert_eq!(EventResult::from(Some(request)), EventResult::navigate(request));
    }
}
