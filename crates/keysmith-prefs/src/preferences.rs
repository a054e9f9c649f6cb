//! Generation preferences — stored as plain JSON in the config directory.
//!
//! Nothing secret lives here: only the option toggles and display choices.
//! Generated passwords are never written to disk.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use keysmith_core::GenerationOptions;

use crate::error::PrefsError;

// ── Bounds ─────────────────────────────────────────────────────────

/// Shortest length accepted for a saved default.
pub const MIN_UI_LENGTH: usize = 8;

/// Longest length accepted for a saved default.
pub const MAX_UI_LENGTH: usize = 128;

/// Most passwords a bare `generate` may print.
pub const MAX_COUNT: u32 = 100;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "KEYSMITH_CONFIG_DIR";

/// Keys accepted by [`Preferences::set`], in display order.
pub const PREFERENCE_KEYS: [&str; 8] = [
    "length",
    "uppercase",
    "lowercase",
    "numbers",
    "symbols",
    "excludeAmbiguous",
    "showStrength",
    "count",
];

// ── Top-level preferences ──────────────────────────────────────────

/// Saved defaults for the command-line shell.
///
/// Persisted to `{config_dir}/preferences.json`. All fields have defaults,
/// so partial files load cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Options used when no flag overrides them.
    #[serde(default)]
    pub generation: GenerationOptions,

    /// Print the entropy strength line after generating.
    #[serde(default = "default_show_strength")]
    pub show_strength: bool,

    /// Passwords printed per `generate` call.
    #[serde(default = "default_count")]
    pub count: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            generation: GenerationOptions::default(),
            show_strength: default_show_strength(),
            count: default_count(),
        }
    }
}

const fn default_show_strength() -> bool {
    true
}
const fn default_count() -> u32 {
    1
}

// ── Validation and editing ─────────────────────────────────────────

impl Preferences {
    /// Check the saved values against the UI bounds.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::InvalidValue`] naming the first offending key
    /// (`uppercase` when no character class is enabled).
    pub fn validate(&self) -> Result<(), PrefsError> {
        self.validate_edit("uppercase")
    }

    /// [`Self::validate`], blaming `edited` when every class ends up off.
    fn validate_edit(&self, edited: &str) -> Result<(), PrefsError> {
        let length = self.generation.length;
        if !(MIN_UI_LENGTH..=MAX_UI_LENGTH).contains(&length) {
            return Err(invalid(
                "length",
                format!("must be between {MIN_UI_LENGTH} and {MAX_UI_LENGTH}, got {length}"),
            ));
        }
        if !(1..=MAX_COUNT).contains(&self.count) {
            return Err(invalid(
                "count",
                format!("must be between 1 and {MAX_COUNT}, got {}", self.count),
            ));
        }
        let g = &self.generation;
        if !(g.include_uppercase || g.include_lowercase || g.include_numbers || g.include_symbols)
        {
            return Err(invalid(
                edited,
                "at least one character class must stay enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Set one preference from its string form.
    ///
    /// The change is only kept if the result still validates.
    ///
    /// # Errors
    ///
    /// - [`PrefsError::UnknownKey`] for a key not in [`PREFERENCE_KEYS`].
    /// - [`PrefsError::InvalidValue`] if `value` does not parse or breaks a bound.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut next = self.clone();
        match key {
            "length" => next.generation.length = parse_number(key, value)?,
            "uppercase" => next.generation.include_uppercase = parse_bool(key, value)?,
            "lowercase" => next.generation.include_lowercase = parse_bool(key, value)?,
            "numbers" => next.generation.include_numbers = parse_bool(key, value)?,
            "symbols" => next.generation.include_symbols = parse_bool(key, value)?,
            "excludeAmbiguous" => next.generation.exclude_ambiguous = parse_bool(key, value)?,
            "showStrength" => next.show_strength = parse_bool(key, value)?,
            "count" => next.count = parse_number(key, value)?,
            other => return Err(PrefsError::UnknownKey(other.to_string())),
        }
        next.validate_edit(key)?;
        *self = next;
        Ok(())
    }

    /// `(key, value)` pairs for display, in [`PREFERENCE_KEYS`] order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let g = &self.generation;
        vec![
            ("length", g.length.to_string()),
            ("uppercase", g.include_uppercase.to_string()),
            ("lowercase", g.include_lowercase.to_string()),
            ("numbers", g.include_numbers.to_string()),
            ("symbols", g.include_symbols.to_string()),
            ("excludeAmbiguous", g.exclude_ambiguous.to_string()),
            ("showStrength", self.show_strength.to_string()),
            ("count", self.count.to_string()),
        ]
    }
}

fn invalid(key: &str, reason: String) -> PrefsError {
    PrefsError::InvalidValue {
        key: key.to_string(),
        reason,
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, PrefsError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, format!("expected true or false, got '{value}'"))),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, PrefsError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(key, format!("expected a whole number, got '{value}'")))
}

// ── Config directory ───────────────────────────────────────────────

/// Resolve the config directory from the process environment.
///
/// Order: `explicit`, then `KEYSMITH_CONFIG_DIR`, then
/// `$XDG_CONFIG_HOME/keysmith`, then `$HOME/.config/keysmith`.
///
/// # Errors
///
/// Returns [`PrefsError::NoConfigDir`] when none of these is available.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf, PrefsError> {
    resolve_config_dir_with(explicit, |name| std::env::var_os(name))
}

fn resolve_config_dir_with(
    explicit: Option<&Path>,
    var: impl Fn(&str) -> Option<OsString>,
) -> Result<PathBuf, PrefsError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let non_empty = |name: &str| var(name).filter(|v| !v.is_empty()).map(PathBuf::from);
    if let Some(dir) = non_empty(CONFIG_DIR_ENV) {
        return Ok(dir);
    }
    if let Some(base) = non_empty("XDG_CONFIG_HOME") {
        return Ok(base.join("keysmith"));
    }
    non_empty("HOME")
        .map(|home| home.join(".config").join("keysmith"))
        .ok_or(PrefsError::NoConfigDir)
}

// ── File I/O ───────────────────────────────────────────────────────

const PREFERENCES_FILE: &str = "preferences.json";

impl Preferences {
    /// Load preferences from `{config_dir}/preferences.json`.
    ///
    /// Returns [`Default::default()`] when the file is missing, contains
    /// invalid JSON, or holds values outside the accepted bounds.
    #[must_use]
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(PREFERENCES_FILE);
        let Ok(contents) = fs::read_to_string(&path) else {
            tracing::debug!(path = %path.display(), "no preferences file, using defaults");
            return Self::default();
        };
        let prefs: Self = match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(path = %path.display(), "corrupt preferences file ignored: {e}");
                return Self::default();
            }
        };
        if let Err(e) = prefs.validate() {
            tracing::warn!(path = %path.display(), "out-of-range preferences ignored: {e}");
            return Self::default();
        }
        prefs
    }

    /// Persist preferences to `{config_dir}/preferences.json`.
    ///
    /// Writes to a `.tmp` file and renames it into place.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Io`] if the directory does not exist or the
    /// file system rejects the write/rename.
    pub fn save(&self, config_dir: &Path) -> Result<(), PrefsError> {
        let path = config_dir.join(PREFERENCES_FILE);
        let tmp = config_dir.join(".preferences.json.tmp");

        let json = serde_json::to_string_pretty(self)?;

        fs::write(&tmp, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), "preferences saved");

        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────
