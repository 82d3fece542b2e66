//! janmitra: citizen services in the terminal
//!
//! Onboarding, sign-in, dashboard, emergency contacts, complaints,
//! applications, announcements, notifications and profile screens.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use janmitra::{
    cli::{self, RunOverrides},
    config::{load_config, TuiPreferences},
    tui::ThemeKind,
    JanmitraError,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "janmitra")]
#[command(version)]
#[command(about = "Citizen services in your terminal", long_about = None)]
#[command(after_help = "KEYS:
    q / Ctrl-C   quit            Esc   back
    1-5  [ ]     tab bar         t     cycle theme
    d            dark mode

EXAMPLES:
    # Start with the JanMitra theme in dark mode
    janmitra run --theme janmitra --dark

    # Keep a debug log while the UI owns the terminal
    janmitra -v --log-file janmitra.log

    # Show the screens and tab bar as JSON
    janmitra screens --json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write log records to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `run` subcommand
#[derive(Args, Default)]
struct RunArgs {
    /// Visual theme (overrides the config file and the remembered theme)
    #[arg(long, value_enum, ignore_case = true)]
    theme: Option<ThemeKind>,

    /// Display name for the session
    #[arg(long)]
    user_name: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive terminal UI (default)
    Run(RunArgs),

    /// List screens and the tab bar without starting the UI
    Screens {
        /// Theme whose tab bar to show
        #[arg(long, value_enum, ignore_case = true, default_value_t = ThemeKind::Bright)]
        theme: ThemeKind,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print an example configuration file
    Config {
        /// Print the JSON Schema instead
        #[arg(long)]
        schema: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default()));

    // The UI owns stdout and redraws over stderr, so keep stderr quiet while it runs
    let is_tui = matches!(command, Commands::Run(_));
    init_logging(cli.verbose, is_tui, cli.log_file.as_deref())?;

    match command {
        Commands::Run(args) => {
            let (config, source) = load_config(cli.config.as_deref())?;
            if let Some(path) = &source {
                tracing::info!(path = %path.display(), "using configuration file");
            }
            let overrides = RunOverrides {
                theme: args.theme,
                user_name: args.user_name,
                dark: args.dark,
                no_mouse: args.no_mouse,
            };
            let config = cli::resolve_config(config, &TuiPreferences::load(), &overrides);
            cli::run_app(config).context("terminal UI failed")
        }
        Commands::Screens { theme, json } => cli::run_screens(theme, json),
        Commands::Config { schema } => cli::run_config(schema),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "janmitra", &mut io::stdout());
            Ok(())
        }
    }
}

/// Initialize logging.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects debug. Without a log file the
/// UI would fight stderr output, so the default drops to warn during `run`.
fn init_logging(verbose: bool, is_tui: bool, log_file: Option<&Path>) -> Result<()> {
    let log_level = match (verbose, is_tui && log_file.is_none()) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    );

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| JanmitraError::io(path, e))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    let stderr_layer = log_file.is_none().then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}
