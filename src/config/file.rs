//! Finding and reading `.janmitra.yaml`.

use super::types::AppConfig;
use crate::error::{JanmitraError, Result};
use std::path::{Path, PathBuf};

/// Names tried in each directory, in order.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".janmitra.yaml",
    ".janmitra.yml",
    "janmitra.yaml",
    "janmitra.yml",
];

/// First config file found in the working directory, then
/// `<config dir>/janmitra/`, then the home directory.
#[must_use]
pub fn discover_config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("janmitra")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

pub(crate) fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Read and parse one YAML file. Both I/O and parse failures name the path.
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| JanmitraError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_yaml::from_str(&content).map_err(|e| JanmitraError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the configuration for this run.
///
/// An explicit path must exist and parse. A discovered file that fails to
/// parse is reported and ignored. Returns the config and the file it came from.
pub fn load_config(explicit_path: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = explicit_path {
        let config = load_config_file(path)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        return Ok((config, Some(path.to_path_buf())));
    }

    Ok(load_discovered(discover_config_file()))
}

fn load_discovered(found: Option<PathBuf>) -> (AppConfig, Option<PathBuf>) {
    match found {
        None => (AppConfig::default(), None),
        Some(path) => match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Ignoring config file: {e}");
                (AppConfig::default(), None)
            }
        },
    }
}

/// Example configuration with every option and its default.
#[must_use]
pub fn generate_example_config() -> String {
    r"# janmitra configuration
#
# Place this file at ./.janmitra.yaml or ~/.config/janmitra/janmitra.yaml

session:
  # Name shown in greetings and on the profile screen
  user_name: Priya Sharma

tui:
  # bright | soft | health | janmitra
  theme: bright
  # Start in dark mode
  dark: false
  # Click tab bar items with the mouse
  mouse_enabled: true
  # Event poll interval in milliseconds (16-2000)
  tick_rate_ms: 250
"
    .to_string()
}
