//! Unbiased integer sampling over a cryptographically secure source.
//!
//! Every random decision the generator makes goes through
//! [`secure_random_int`], which draws 32-bit words from a [`RandomSource`]
//! and removes modulo bias by rejection sampling. Production code uses
//! [`OsRandom`]; tests inject deterministic sources through the same trait.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::PasswordError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Size of the value space of one draw (`2^32`).
const WORD_SPACE: u64 = 1 << 32;

/// Consecutive rejected draws tolerated before giving up.
///
/// The rejection zone is always smaller than half the word space, so a
/// healthy CSPRNG hits this cap with probability below `2^-1024`.
pub const MAX_REJECTED_DRAWS: u32 = 1024;

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// A source of uniformly distributed 32-bit words.
///
/// Implementations must be cryptographically secure in production.
pub trait RandomSource {
    /// Draw one uniformly random `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::RandomSource`] if the underlying generator
    /// cannot produce output.
    fn next_u32(&mut self) -> Result<u32, PasswordError>;
}

/// The operating system CSPRNG (`getrandom` via [`OsRng`]).
///
/// Zero-sized and stateless: create one wherever it is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_u32(&mut self) -> Result<u32, PasswordError> {
        let mut word = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut word)
            .map_err(|e| PasswordError::RandomSource(e.to_string()))?;
        Ok(u32::from_le_bytes(word))
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Draw a uniformly distributed integer in `[0, max)`.
///
/// Draws at or above `floor(2^32 / max) * max` are discarded and redrawn, so
/// every result is exactly equally likely.
///
/// # Errors
///
/// - [`PasswordError::InvalidArgument`] if `max` is `0` or larger than `2^32`.
/// - [`PasswordError::RandomSourceExhausted`] after [`MAX_REJECTED_DRAWS`]
///   consecutive rejections.
/// - Any error returned by the source itself.
#[allow(clippy::arithmetic_side_effects)]
pub fn secure_random_int<R: RandomSource + ?Sized>(
    rng: &mut R,
    max: usize,
) -> Result<usize, PasswordError> {
    let bound = u64::try_from(max)
        .ok()
        .filter(|b| (1..=WORD_SPACE).contains(b))
        .ok_or_else(|| {
            PasswordError::InvalidArgument(format!(
                "sampling bound must be between 1 and 2^32, got {max}"
            ))
        })?;

    // `bound` is in 1..=2^32: the division cannot trap and the product cannot
    // exceed WORD_SPACE.
    let limit = (WORD_SPACE / bound) * bound;

    for _ in 0..MAX_REJECTED_DRAWS {
        let draw = u64::from(rng.next_u32()?);
        if draw < limit {
            let value = draw % bound;
            return usize::try_from(value).map_err(|_| {
                PasswordError::InvalidArgument(format!("sampled value {value} exceeds usize"))
            });
        }
    }

    tracing::warn!(
        bound,
        rejected = MAX_REJECTED_DRAWS,
        "random source never left the rejection zone"
    );
    Err(PasswordError::RandomSourceExhausted {
        rejected: MAX_REJECTED_DRAWS,
    })
}

/// Fisher-Yates shuffle driven by [`secure_random_int`].
///
/// Walks `i` from the last index down to `1`, swapping with a uniform index
/// in `[0, i]`.
///
/// # Errors
///
/// Propagates any sampling error; `items` may be partially shuffled then.
pub fn shuffle<T, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &mut [T],
) -> Result<(), PasswordError> {
    for i in (1..items.len()).rev() {
        let j = secure_random_int(rng, i.saturating_add(1))?;
        items.swap(i, j);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
