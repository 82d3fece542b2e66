//! Error types for janmitra.
//!
//! Navigation itself cannot fail; errors only come from the edges of the
//! program: reading configuration and driving the terminal.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for janmitra operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum JanmitraError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be read or parsed
    #[error("Failed to load configuration from {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The configuration was read but failed validation
    #[error("Invalid configuration: {}", format_config_errors(.0))]
    InvalidConfig(Vec<ConfigError>),

    /// Terminal setup, drawing or teardown failed
    #[error("Terminal error: {context}")]
    Terminal {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

fn format_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl JanmitraError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::Io {
            message: source.to_string(),
            path: Some(path),
            source,
        }
    }

    pub fn terminal(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            context: context.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JanmitraError>;

/// Attach terminal context to IO results.
pub trait TerminalContext<T> {
    fn terminal_context(self, context: &str) -> Result<T>;
}

impl<T> TerminalContext<T> for std::io::Result<T> {
    fn terminal_context(self, context: &str) -> Result<T> {
        self.map_err(|e| JanmitraError::terminal(context, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_lists_every_problem() {
        let err = JanmitraError::InvalidConfig(vec![
            ConfigError {
                field: "session.user_name".to_string(),
                message: "must not be empty".to_string(),
            },
            ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: "must be between 16 and 2000".to_string(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("session.user_name: must not be empty"));
        assert!(msg.contains("tui.tick_rate_ms"));
    }

    #[test]
    fn test_terminal_context() {
        let result: std::io::Result<()> = Err(std::io::Error::other("no tty"));
        let err = result.terminal_context("enable raw mode").unwrap_err();
        assert_eq!(err.to_string(), "Terminal error: enable raw mode");
    }
}
