//! KEYSMITH command-line application — thin shell over the engine.
//!
//! Parses arguments, installs logging, resolves the config directory, and
//! dispatches to the handlers in [`commands`]. All generation logic lives in
//! `keysmith-core`; persisted defaults come from `keysmith-prefs`.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod commands;
pub mod error;
pub mod scorer;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use keysmith_prefs::{resolve_config_dir, Preferences};

pub use error::CliError;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "KEYSMITH_LOG";

#[derive(Debug, Parser)]
#[command(name = "keysmith")]
#[command(about = "Generate strong random passwords and grade their strength")]
#[command(version)]
pub struct Cli {
    /// Directory holding `preferences.json` (overrides `KEYSMITH_CONFIG_DIR`).
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log debug events to stderr (`KEYSMITH_LOG` takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one or more passwords (flags override saved preferences)
    Generate(commands::generate::GenerateArgs),

    /// Estimate the strength of an existing password
    Check(commands::check::CheckArgs),

    /// Show or edit saved preferences
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Run one parsed invocation against the real stdio streams.
///
/// # Errors
///
/// Returns a [`CliError`] for any failed step; `main` prints it and exits 1.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    init_tracing(cli.verbose);

    let mut out = io::stdout().lock();

    match &cli.command {
        Command::Generate(args) => {
            let prefs = match resolve_config_dir(cli.config_dir.as_deref()) {
                Ok(dir) => {
                    tracing::debug!(config_dir = %dir.display(), "loading preferences");
                    Preferences::load(&dir)
                }
                Err(e) => {
                    tracing::warn!("using default preferences: {e}");
                    Preferences::default()
                }
            };
            let mut err = io::stderr().lock();
            commands::generate::run(args, &prefs, &mut out, &mut err)
        }
        Command::Check(args) => {
            let mut input = io::stdin().lock();
            commands::check::run(args, &scorer::ZxcvbnScorer, &mut input, &mut out)
        }
        Command::Config { action } => {
            let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
            commands::config::run(action, &config_dir, &mut out)
        }
    }
}

/// Install a stderr `fmt` subscriber filtered by [`LOG_ENV`].
///
/// Repeated calls are ignored.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
