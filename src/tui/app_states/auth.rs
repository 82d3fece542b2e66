//! Sign-in / sign-up form state.
//!
//! The form stores whatever is typed and clears itself on submit. Nothing is
//! checked or kept: submitting always starts a session.

use crate::router::NavRequest;

/// Character shown in place of each password character.
pub const PASSWORD_MASK: char = '•';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    /// Fields shown in this mode, top to bottom.
    #[must_use]
    pub const fn fields(self) -> &'static [AuthField] {
        match self {
            Self::SignIn => &[AuthField::Phone, AuthField::Password],
            Self::SignUp => &[
                AuthField::Name,
                AuthField::Phone,
                AuthField::Email,
                AuthField::Password,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Phone,
    Email,
    Password,
}

impl AuthField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Phone => "Phone Number",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Phone => "+91 98765 43210",
            Self::Email => "you@example.com",
            Self::Password => "Enter your password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub mode: AuthMode,
    pub focus: AuthField,
    pub show_password: bool,
    name: String,
    phone: String,
    email: String,
    password: String,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            mode: AuthMode::SignIn,
            focus: AuthField::Phone,
            show_password: false,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            password: String::new(),
        }
    }
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between sign-in and sign-up, moving focus to the first field.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.focus = self.mode.fields()[0];
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    fn focus_index(&self) -> usize {
        self.mode
            .fields()
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    pub fn focus_next(&mut self) {
        let fields = self.mode.fields();
        self.focus = fields[(self.focus_index() + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.mode.fields();
        self.focus = fields[(self.focus_index() + fields.len() - 1) % fields.len()];
    }

    fn field_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Phone => &mut self.phone,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    #[must_use]
    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Phone => &self.phone,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    /// Text to draw for `field`; the password is masked unless revealed.
    #[must_use]
    pub fn display_value(&self, field: AuthField) -> String {
        let value = self.value(field);
        if field == AuthField::Password && !self.show_password {
            value.chars().map(|_| PASSWORD_MASK).collect()
        } else {
            value.to_string()
        }
    }

    pub fn input(&mut self, c: char) {
        let focus = self.focus;
        self.field_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    /// Discard the input and ask for a session.
    pub fn submit(&mut self) -> NavRequest {
        tracing::debug!(mode = self.mode.label(), "auth form submitted");
        *self = Self {
            mode: self.mode,
            ..Self::default()
        };
        self.focus = self.mode.fields()[0];
        NavRequest::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(state: &mut AuthState, text: &str) {
        for c in text.chars() {
            state.input(c);
        }
    }

    #[test]
    fn test_focus_cycles_visible_fields() {
        let mut state = AuthState::new();
        assert_eq!(state.focus, AuthField::Phone);
        state.focus_next();
        assert_eq!(state.focus, AuthField::Password);
        state.focus_next();
        assert_eq!(state.focus, AuthField::Phone);
        state.focus_prev();
        assert_eq!(state.focus, AuthField::Password);
    }

    #[test]
    fn test_sign_up_shows_extra_fields() {
        let mut state = AuthState::new();
        state.toggle_mode();
        assert_eq!(state.mode, AuthMode::SignUp);
        assert_eq!(state.focus, AuthField::Name);
        assert_eq!(state.mode.fields().len(), 4);
    }

    #[test]
    fn test_password_masking() {
        let mut state = AuthState::new();
        state.focus = AuthField::Password;
        type_str(&mut state, "secret");
        assert_eq!(state.display_value(AuthField::Password), "••••••");
        state.toggle_show_password();
        assert_eq!(state.display_value(AuthField::Password), "secret");
        state.backspace();
        assert_eq!(state.value(AuthField::Password), "secre");
    }

    #[test]
    fn test_submit_clears_and_logs_in() {
        let mut state = AuthState::new();
        type_str(&mut state, "98765");
        state.show_password = true;
        assert_eq!(state.submit(), NavRequest::Login);
        assert_eq!(state.value(AuthField::Phone), "");
        assert!(!state.show_password);
        assert_eq!(state.mode, AuthMode::SignIn);
    }
}
