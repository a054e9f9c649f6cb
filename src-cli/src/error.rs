//! Error type for the command-line shell.

use thiserror::Error;

use keysmith_core::PasswordError;
use keysmith_prefs::PrefsError;

/// Anything that can end a `keysmith` invocation with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation failed (bad options, random source failure).
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Preferences could not be resolved, edited or saved.
    #[error(transparent)]
    Prefs(#[from] PrefsError),

    /// Writing output or reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `check` read nothing from standard input.
    #[error("no password given on standard input")]
    EmptyInput,
}
