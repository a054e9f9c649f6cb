//! `keysmith-core` — Password generation engine for KEYSMITH.
//!
//! Pure and synchronous: no I/O, no async, no shared state. Every random
//! decision goes through [`random::secure_random_int`], which removes modulo
//! bias by rejection sampling over an OS CSPRNG.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod random;

pub mod password;

pub mod entropy;
pub mod strength;

pub use entropy::{alphabet_size, calculate_password_entropy, estimate_entropy_bits};
pub use error::PasswordError;
pub use password::charset::{
    build_pool, included_classes, meets_requirements, CharacterClass, AMBIGUOUS_CHARS,
};
pub use password::{
    generate_password, generate_password_guaranteed, generate_password_guaranteed_with,
    generate_password_with, GenerationOptions, DEFAULT_PASSWORD_LENGTH, MAX_FAST_PATH_ATTEMPTS,
};
pub use random::{secure_random_int, shuffle, OsRandom, RandomSource, MAX_REJECTED_DRAWS};
pub use strength::{
    analyze_strength, describe_score, describe_strength, get_password_strength_description,
    ScoreReport, StrengthReport, StrengthScorer, StrengthTier,
};
