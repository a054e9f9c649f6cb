//! Preference error types for `keysmith-prefs`.

use thiserror::Error;

/// Errors produced while reading, editing, or writing preferences.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Preferences could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// `config set` was given a key that does not exist.
    #[error("unknown preference key: '{0}'")]
    UnknownKey(String),

    /// A value could not be parsed or is out of range.
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Preference key being set.
        key: String,
        /// Why the value was refused.
        reason: String,
    },

    /// No configuration directory could be determined.
    #[error("no configuration directory: set --config-dir, KEYSMITH_CONFIG_DIR or HOME")]
    NoConfigDir,
}
