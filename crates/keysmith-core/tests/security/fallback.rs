//! Constructive fallback under a hostile random source.
//!
//! `Skewed` answers every draw with a tiny value, so each fast-path candidate
//! is built from the first pool entries (uppercase letters only) and misses
//! the other classes. Generation must still return a compliant password.

use keysmith_core::{
    generate_password_with, meets_requirements, CharacterClass, GenerationOptions,
    PasswordError, RandomSource, AMBIGUOUS_CHARS, MAX_FAST_PATH_ATTEMPTS,
};

/// Cycles through 0, 1, 2 and counts draws.
#[derive(Default)]
struct Skewed {
    next: u32,
    draws: u32,
}

impl RandomSource for Skewed {
    fn next_u32(&mut self) -> Result<u32, PasswordError> {
        let word = self.next;
        self.next = (self.next + 1) % 3;
        self.draws += 1;
        Ok(word)
    }
}

fn all_classes(length: usize, exclude_ambiguous: bool) -> GenerationOptions {
    GenerationOptions {
        length,
        exclude_ambiguous,
        ..GenerationOptions::default()
    }
}

#[test]
fn skewed_source_still_meets_every_requirement() {
    for length in [4, 5, 8, 16, 64] {
        let mut rng = Skewed::default();
        let options = all_classes(length, false);
        let pw = generate_password_with(&mut rng, &options).unwrap();
        assert_eq!(pw.len(), length);
        assert!(meets_requirements(&pw, &options), "unmet for length {length}: {pw}");
        for class in CharacterClass::ALL {
            assert!(pw.chars().any(|c| class.contains(c)), "{class:?} missing: {pw}");
        }
    }
}

#[test]
fn skewed_source_exhausts_fast_path_first() {
    let length = 16;
    let mut rng = Skewed::default();
    let options = all_classes(length, false);
    generate_password_with(&mut rng, &options).unwrap();

    let fast_path_draws = MAX_FAST_PATH_ATTEMPTS * u32::try_from(length).unwrap();
    assert!(
        rng.draws > fast_path_draws,
        "expected fallback after {fast_path_draws} draws, saw {}",
        rng.draws
    );
}

#[test]
fn skewed_fallback_honours_exclude_ambiguous() {
    let mut rng = Skewed::default();
    let options = all_classes(32, true);
    let pw = generate_password_with(&mut rng, &options).unwrap();
    assert!(meets_requirements(&pw, &options));
    assert!(pw.bytes().all(|b| !AMBIGUOUS_CHARS.contains(&b)), "ambiguous char in: {pw}");
}
