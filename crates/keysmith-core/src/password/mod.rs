//! Random password generation.
//!
//! [`generate_password`] samples `length` characters independently from the
//! selected pool and checks that every requested class showed up. A miss is
//! redrawn from scratch up to [`MAX_FAST_PATH_ATTEMPTS`] times; after that
//! [`generate_password_guaranteed`] builds a compliant password by seeding one
//! character per class, filling the rest, and Fisher-Yates shuffling.
//!
//! All randomness flows through [`secure_random_int`], backed by `OsRng`
//! unless a [`RandomSource`] is injected with the `_with` variants.

pub mod charset;

use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::PasswordError;
use crate::random::{secure_random_int, shuffle, OsRandom, RandomSource};

use charset::{build_pool, included_classes, meets_requirements, CharacterClass};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Independent fast-path draws tried before the constructive fallback.
pub const MAX_FAST_PATH_ATTEMPTS: u32 = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What a generated password must look like.
///
/// The core accepts any `length >= 1`; narrower UI bounds are enforced by
/// callers.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    /// Number of characters to produce.
    pub length: usize,
    /// Include uppercase letters (A-Z).
    pub include_uppercase: bool,
    /// Include lowercase letters (a-z).
    pub include_lowercase: bool,
    /// Include digits (0-9).
    pub include_numbers: bool,
    /// Include symbols (`!@#$%^&*()_+-=[]{}|;:,.<>?`).
    pub include_symbols: bool,
    /// Drop `I`, `l`, `1`, `O` and `0` from the letter and digit classes.
    pub exclude_ambiguous: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationOptions {
    /// Whether `class` is switched on.
    #[must_use]
    pub const fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a password from the OS CSPRNG.
///
/// # Errors
///
/// See [`generate_password_with`].
pub fn generate_password(options: &GenerationOptions) -> Result<String, PasswordError> {
    generate_password_with(&mut OsRandom, options)
}

/// Generate a password using `rng` for every random decision.
///
/// # Errors
///
/// - [`PasswordError::InvalidArgument`] if `length` is `0`, smaller than
///   the number of selected classes (no password that short can contain one
///   character of each), or too large to allocate.
/// - [`PasswordError::NoCharacterTypesSelected`] if the pool is empty.
/// - Any sampling error from `rng`.
pub fn generate_password_with<R: RandomSource + ?Sized>(
    rng: &mut R,
    options: &GenerationOptions,
) -> Result<String, PasswordError> {
    check_length(options.length)?;

    let pool = build_pool(options);
    if pool.is_empty() {
        return Err(PasswordError::NoCharacterTypesSelected);
    }
    check_room_for_classes(options)?;

    for attempt in 1..=MAX_FAST_PATH_ATTEMPTS {
        let mut candidate = sample_from_pool(rng, &pool, options.length)?;
        if meets_requirements(&candidate, options) {
            tracing::trace!(attempt, length = options.length, "fast path accepted");
            return Ok(std::mem::take(&mut *candidate));
        }
    }

    tracing::debug!(
        attempts = MAX_FAST_PATH_ATTEMPTS,
        length = options.length,
        "fast path never covered every class, building password constructively"
    );
    generate_password_guaranteed_with(rng, options)
}

/// Build a password that satisfies every class requirement by construction.
///
/// # Errors
///
/// See [`generate_password_guaranteed_with`].
pub fn generate_password_guaranteed(options: &GenerationOptions) -> Result<String, PasswordError> {
    generate_password_guaranteed_with(&mut OsRandom, options)
}

/// Constructive generation with an injected source.
///
/// One character is drawn from each included class (ambiguous characters
/// filtered, symbols untouched), the remainder is drawn from the union of
/// those classes, and the whole buffer is Fisher-Yates shuffled so the seeded
/// characters do not sit at the front.
///
/// # Errors
///
/// - [`PasswordError::InvalidArgument`] if `length` is `0` or smaller than the
///   number of selected classes (seeds are never truncated), or too large to
///   allocate.
/// - [`PasswordError::NoCharacterTypesSelected`] if no class is selected.
/// - Any sampling error from `rng`.
pub fn generate_password_guaranteed_with<R: RandomSource + ?Sized>(
    rng: &mut R,
    options: &GenerationOptions,
) -> Result<String, PasswordError> {
    check_length(options.length)?;

    let classes = included_classes(options);
    if classes.is_empty() {
        return Err(PasswordError::NoCharacterTypesSelected);
    }
    check_room_for_classes(options)?;

    let mut chars: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::new());
    chars.try_reserve_exact(options.length).map_err(|e| unallocatable(options.length, &e))?;
    let mut available: Vec<u8> = Vec::new();

    for class in classes {
        let members = class.filtered_members(options.exclude_ambiguous);
        chars.push(members[secure_random_int(rng, members.len())?]);
        available.extend_from_slice(&members);
    }

    while chars.len() < options.length {
        chars.push(available[secure_random_int(rng, available.len())?]);
    }

    shuffle(rng, chars.as_mut_slice())?;

    Ok(chars.iter().copied().map(char::from).collect())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn check_length(length: usize) -> Result<(), PasswordError> {
    if length == 0 {
        return Err(PasswordError::InvalidArgument(
            "length must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn check_room_for_classes(options: &GenerationOptions) -> Result<(), PasswordError> {
    let required = included_classes(options).len();
    if options.length < required {
        return Err(PasswordError::InvalidArgument(format!(
            "length ({}) must be at least {required} to include one character from each selected class",
            options.length
        )));
    }
    Ok(())
}

fn unallocatable(length: usize, err: &TryReserveError) -> PasswordError {
    PasswordError::InvalidArgument(format!("length {length} is too large: {err}"))
}

/// `length` independent draws from `pool`, in draw order.
fn sample_from_pool<R: RandomSource + ?Sized>(
    rng: &mut R,
    pool: &[u8],
    length: usize,
) -> Result<Zeroizing<String>, PasswordError> {
    let mut out = Zeroizing::new(String::new());
    out.try_reserve_exact(length).map_err(|e| unallocatable(length, &e))?;
    for _ in 0..length {
        out.push(char::from(pool[secure_random_int(rng, pool.len())?]));
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
