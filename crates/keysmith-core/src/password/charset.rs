//! Character classes, pool assembly, and the class-presence check.

use super::GenerationOptions;

// Character tables
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easily confused with one another when read.
pub const AMBIGUOUS_CHARS: &[u8] = b"Il1O0";

/// One of the four character categories a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// `A-Z`
    Uppercase,
    /// `a-z`
    Lowercase,
    /// `0-9`
    Numbers,
    /// `!@#$%^&*()_+-=[]{}|;:,.<>?`
    Symbols,
}

impl CharacterClass {
    /// Every class, in pool order.
    pub const ALL: [Self; 4] = [
        Self::Uppercase,
        Self::Lowercase,
        Self::Numbers,
        Self::Symbols,
    ];

    /// Full, unfiltered member table.
    #[must_use]
    pub const fn members(self) -> &'static [u8] {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Numbers => NUMBERS,
            Self::Symbols => SYMBOLS,
        }
    }

    /// Whether `c` belongs to this class (unfiltered membership).
    #[must_use]
    pub fn contains(self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|b| self.members().contains(&b))
    }

    /// Members eligible for sampling.
    ///
    /// Ambiguous characters are dropped when `exclude_ambiguous` is set.
    /// Symbols have no ambiguous members and are never filtered.
    #[must_use]
    pub fn filtered_members(self, exclude_ambiguous: bool) -> Vec<u8> {
        let members = self.members();
        if exclude_ambiguous && self != Self::Symbols {
            members
                .iter()
                .copied()
                .filter(|b| !AMBIGUOUS_CHARS.contains(b))
                .collect()
        } else {
            members.to_vec()
        }
    }

    /// Short lowercase name, as used in logs and config keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Numbers => "numbers",
            Self::Symbols => "symbols",
        }
    }
}

/// Classes switched on in `options`, in pool order.
#[must_use]
pub fn included_classes(options: &GenerationOptions) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| options.includes(*class))
        .collect()
}

/// Assemble the sampling alphabet for one generation call.
///
/// Concatenates every included class in [`CharacterClass::ALL`] order, then
/// drops [`AMBIGUOUS_CHARS`] if requested. May return an empty pool; callers
/// decide how to treat that.
#[must_use]
pub fn build_pool(options: &GenerationOptions) -> Vec<u8> {
    included_classes(options)
        .into_iter()
        .flat_map(|class| class.filtered_members(options.exclude_ambiguous))
        .collect()
}

/// Check that `candidate` holds at least one character of every included class.
///
/// Matching uses each class's full membership, not the filtered pool, so the
/// result does not depend on how the pool was built.
#[must_use]
pub fn meets_requirements(candidate: &str, options: &GenerationOptions) -> bool {
    included_classes(options)
        .into_iter()
        .all(|class| candidate.chars().any(|c| class.contains(c)))
}
