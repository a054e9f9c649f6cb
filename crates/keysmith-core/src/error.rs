//! Error types for `keysmith-core`.

use thiserror::Error;

/// Errors produced by password generation.
///
/// Entropy estimation and strength labelling are total functions and never
/// produce one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// The assembled character pool is empty: no class was selected.
    #[error("no character types selected for password generation")]
    NoCharacterTypesSelected,

    /// A caller-supplied parameter is out of range (zero sampling bound,
    /// zero length, or a length too short to hold every required class).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The random source kept landing in the rejection zone.
    ///
    /// Only a broken or adversarial source can trip this.
    #[error("random source exhausted after {rejected} rejected draws")]
    RandomSourceExhausted {
        /// Number of consecutive draws that were discarded.
        rejected: u32,
    },

    /// The operating system CSPRNG failed to produce bytes.
    #[error("random source failure: {0}")]
    RandomSource(String),
}
