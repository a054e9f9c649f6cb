//! Coarse entropy estimate from observed character classes.
//!
//! The estimate assumes every character was drawn uniformly from the union of
//! the classes that appear in the string. It knows nothing about words,
//! keyboard walks or repetition; use a pattern-aware scorer for that.

/// Alphabet contribution of ASCII lowercase letters.
const LOWERCASE_SPACE: u32 = 26;
/// Alphabet contribution of ASCII uppercase letters.
const UPPERCASE_SPACE: u32 = 26;
/// Alphabet contribution of ASCII digits.
const DIGIT_SPACE: u32 = 10;
/// Approximate size of the symbol space; any other character counts here.
const OTHER_SPACE: u32 = 32;

/// Assumed alphabet size for `password`, summed over the classes it uses.
#[must_use]
pub fn alphabet_size(password: &str) -> u32 {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_other = password.chars().any(|c| !c.is_ascii_alphanumeric());

    [
        (has_lower, LOWERCASE_SPACE),
        (has_upper, UPPERCASE_SPACE),
        (has_digit, DIGIT_SPACE),
        (has_other, OTHER_SPACE),
    ]
    .into_iter()
    .filter_map(|(present, space)| present.then_some(space))
    .sum()
}

/// Estimated entropy in bits: `chars * log2(alphabet_size)`.
///
/// Returns `0.0` for the empty string. Computed in log space, so arbitrarily
/// long inputs stay finite.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::arithmetic_side_effects)]
pub fn calculate_password_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    let length = password.chars().count() as f64;
    length * f64::from(alphabet_size(password)).log2()
}

/// Alias of [`calculate_password_entropy`].
#[must_use]
pub fn estimate_entropy_bits(password: &str) -> f64 {
    calculate_password_entropy(password)
}
