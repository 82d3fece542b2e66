//! Semantic checks that serde cannot express.
//!
//! Parsing guarantees the shape of a config; the checks here reject values
//! that parse but cannot drive the app. Every check runs, so one pass reports
//! every bad field at once.

use super::types::{AppConfig, SessionConfig, TuiConfig, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS};
use std::fmt;

/// A single rejected field, addressed by its dotted YAML path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Anything with fields that can be checked after deserialization.
pub trait Validatable {
    fn validate(&self) -> Vec<ConfigError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.session
            .validate()
            .into_iter()
            .chain(self.tui.validate())
            .collect()
    }
}

impl Validatable for SessionConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.user_name.trim().is_empty() {
            vec![ConfigError::new("session.user_name", "must not be empty")]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let rate = self.tick_rate_ms;
        if (MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&rate) {
            return Vec::new();
        }
        vec![ConfigError::new(
            "tui.tick_rate_ms",
            format!("must be between {MIN_TICK_RATE_MS} and {MAX_TICK_RATE_MS}, got {rate}"),
        )]
    }
}
