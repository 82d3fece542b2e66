//! Settings for a janmitra session.
//!
//! Values come from four layers, highest first: command-line flags, the
//! theme saved by the last run, a YAML file, then built-in defaults. The
//! file layer is typed and validated here; the flags are layered on in
//! [`crate::cli`].
//!
//! # File format
//!
//! Place a `.janmitra.yaml` file in the working directory or `~/.config/janmitra/`:
//!
//! ```yaml
//! session:
//!   user_name: Priya Sharma
//! tui:
//!   theme: janmitra
//!   dark: true
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, SessionConfig, TuiConfig, TuiPreferences, MAX_TICK_RATE_MS,
    MIN_TICK_RATE_MS,
};
pub use validation::{ConfigError, Validatable};

pub use file::{discover_config_file, generate_example_config, load_config, load_config_file};

/// JSON Schema describing `.janmitra.yaml`.
///
/// Editors can use it for validation and autocompletion of `.janmitra.yaml`.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
