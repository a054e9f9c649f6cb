#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for preference editing and persistence.

use keysmith_prefs::{Preferences, MAX_COUNT, MAX_UI_LENGTH, MIN_UI_LENGTH, PREFERENCE_KEYS};
use proptest::prelude::*;

/// Strategy for a `(key, value)` edit, valid or not.
fn edit_strategy() -> impl Strategy<Value = (String, String)> {
    let key = prop_oneof![
        proptest::sample::select(PREFERENCE_KEYS.to_vec()).prop_map(str::to_string),
        "[a-z]{1,8}",
    ];
    let value = prop_oneof![
        Just("true".to_string()),
        Just("false".to_string()),
        (0usize..300).prop_map(|n| n.to_string()),
        "[a-z]{0,6}",
    ];
    (key, value)
}

/// Strategy for preferences that pass validation.
fn valid_prefs_strategy() -> impl Strategy<Value = Preferences> {
    (
        MIN_UI_LENGTH..=MAX_UI_LENGTH,
        any::<[bool; 4]>().prop_filter("at least one class", |f| f.iter().any(|&b| b)),
        any::<bool>(),
        any::<bool>(),
        1..=MAX_COUNT,
    )
        .prop_map(|(length, flags, exclude_ambiguous, show_strength, count)| {
            let mut prefs = Preferences::default();
            prefs.generation.length = length;
            prefs.generation.include_uppercase = flags[0];
            prefs.generation.include_lowercase = flags[1];
            prefs.generation.include_numbers = flags[2];
            prefs.generation.include_symbols = flags[3];
            prefs.generation.exclude_ambiguous = exclude_ambiguous;
            prefs.show_strength = show_strength;
            prefs.count = count;
            prefs
        })
}

proptest! {
    /// No sequence of edits, accepted or refused, leaves invalid preferences.
    #[test]
    fn edits_keep_preferences_valid(edits in proptest::collection::vec(edit_strategy(), 0..20)) {
        let mut prefs = Preferences::default();
        for (key, value) in &edits {
            let _ = prefs.set(key, value);
            prop_assert!(prefs.validate().is_ok(), "invalid after {}={}: {:?}", key, value, prefs);
        }
    }

    /// Valid preferences survive a save/load cycle unchanged.
    #[test]
    fn save_load_roundtrip(prefs in valid_prefs_strategy()) {
        let dir = tempfile::TempDir::new().unwrap();
        prefs.save(dir.path()).unwrap();
        prop_assert_eq!(Preferences::load(dir.path()), prefs);
    }
}
