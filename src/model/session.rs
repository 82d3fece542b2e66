//! Citizen session state.

use serde::Serialize;

/// Display name used when no configuration overrides it.
pub const DEFAULT_USER_NAME: &str = "Priya Sharma";

/// Whether, and as whom, the citizen is signed in.
///
/// No credentials are held: signing in only flips the flag. The display name is
/// fixed when the session is created and never changes for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    authenticated: bool,
    user_name: String,
}

impl Session {
    /// Unauthenticated session for `user_name`.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            authenticated: false,
            user_name: user_name.into(),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// First name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.user_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.user_name)
    }

    /// Initials for the avatar badge (at most two letters).
    #[must_use]
    pub fn initials(&self) -> String {
        self.user_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub(crate) fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.user_name(), "Priya Sharma");
    }

    #[test]
    fn test_name_helpers() {
        let session = Session::new("Priya Sharma");
        assert_eq!(session.first_name(), "Priya");
        assert_eq!(session.initials(), "PS");

        let single = Session::new("Ravi");
        assert_eq!(single.first_name(), "Ravi");
        assert_eq!(single.initials(), "R");

        let blank = Session::new("");
        assert_eq!(blank.first_name(), "");
        assert_eq!(blank.initials(), "");
    }
}
