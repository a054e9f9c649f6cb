//! `keysmith config` — inspect and edit saved preferences.

use std::fs;
use std::io::Write;
use std::path::Path;

use clap::Subcommand;

use keysmith_prefs::Preferences;

use crate::error::CliError;

/// Actions under `config`.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Print the current preferences
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change one preference (`length`, `uppercase`, `lowercase`, `numbers`,
    /// `symbols`, `excludeAmbiguous`, `showStrength`, `count`)
    Set {
        /// Preference key
        key: String,
        /// New value
        value: String,
    },
    /// Restore every preference to its default
    Reset,
    /// Print the directory preferences are stored in
    Path,
}

/// Apply `action` to the preferences under `config_dir`.
///
/// # Errors
///
/// Returns [`CliError::Prefs`] for rejected edits or failed saves, and
/// [`CliError::Io`] / [`CliError::Json`] on output failures.
pub fn run(action: &ConfigAction, config_dir: &Path, out: &mut dyn Write) -> Result<(), CliError> {
    match action {
        ConfigAction::Show { json } => {
            let prefs = Preferences::load(config_dir);
            if *json {
                serde_json::to_writer_pretty(&mut *out, &prefs)?;
                writeln!(out)?;
            } else {
                for (key, value) in prefs.entries() {
                    writeln!(out, "{key:<17}{value}")?;
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut prefs = Preferences::load(config_dir);
            prefs.set(key, value)?;
            persist(&prefs, config_dir)?;
            tracing::info!(key = %key, "preference updated");
            writeln!(out, "{key} = {value}")?;
        }
        ConfigAction::Reset => {
            persist(&Preferences::default(), config_dir)?;
            tracing::info!("preferences reset to defaults");
            writeln!(out, "preferences reset")?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", config_dir.display())?;
        }
    }
    Ok(())
}

fn persist(prefs: &Preferences, config_dir: &Path) -> Result<(), CliError> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    prefs.save(config_dir)?;
    Ok(())
}
