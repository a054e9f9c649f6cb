//! `keysmith-prefs` — Persisted generation preferences for KEYSMITH.
//!
//! Settings live as plain JSON under the user's config directory and are
//! read before every command, so a bare `keysmith generate` reproduces the
//! last saved choices.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod preferences;

pub use error::PrefsError;
pub use preferences::{
    resolve_config_dir, Preferences, CONFIG_DIR_ENV, MAX_COUNT, MAX_UI_LENGTH, MIN_UI_LENGTH,
    PREFERENCE_KEYS,
};
