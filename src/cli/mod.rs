//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the logic for a specific CLI subcommand.

mod run;
mod screens;

pub use run::{resolve_config, run_app, RunOverrides};
pub use screens::{format_screens_table, run_screens, screens_report, ScreensReport};

use anyhow::Result;

/// Run the config command: print an example file or the JSON Schema.
pub fn run_config(schema: bool) -> Result<()> {
    if schema {
        println!("{}", crate::config::generate_json_schema()?);
    } else {
        print!("{}", crate::config::generate_example_config());
    }
    Ok(())
}
