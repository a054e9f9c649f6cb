//! Strength tiers and the pattern-aware scorer seam.
//!
//! Two sources feed the same five-tier vocabulary:
//! - the entropy estimate from [`crate::entropy`], bucketed by fixed thresholds;
//! - a 0–4 score from an external pattern-aware estimator behind
//!   [`StrengthScorer`], mapped by direct index.

use serde::{Deserialize, Serialize};

use crate::entropy::calculate_password_entropy;

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Upper bounds (exclusive, in bits) of the first four tiers.
const ENTROPY_THRESHOLDS: [f64; 4] = [30.0, 50.0, 70.0, 90.0];

/// Five-step strength scale shared by entropy and score labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthTier {
    /// Under 30 bits, or score 0.
    #[serde(rename = "Very Weak")]
    VeryWeak,
    /// 30 to under 50 bits, or score 1.
    Weak,
    /// 50 to under 70 bits, or score 2.
    Fair,
    /// 70 to under 90 bits, or score 3.
    Good,
    /// 90 bits and up, or score 4.
    Strong,
}

impl StrengthTier {
    /// Every tier, weakest first. Index equals the 0–4 score.
    pub const ALL: [Self; 5] = [
        Self::VeryWeak,
        Self::Weak,
        Self::Fair,
        Self::Good,
        Self::Strong,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket an entropy estimate: `<30` Very Weak, `<50` Weak, `<70` Fair,
/// `<90` Good, otherwise Strong.
///
/// NaN is treated as no entropy at all.
#[must_use]
pub fn describe_strength(entropy_bits: f64) -> StrengthTier {
    if entropy_bits.is_nan() {
        return StrengthTier::VeryWeak;
    }
    ENTROPY_THRESHOLDS
        .iter()
        .zip(StrengthTier::ALL)
        .find_map(|(&limit, tier)| (entropy_bits < limit).then_some(tier))
        .unwrap_or(StrengthTier::Strong)
}

/// Label for an entropy estimate, as shown to users.
#[must_use]
pub fn get_password_strength_description(entropy_bits: f64) -> &'static str {
    describe_strength(entropy_bits).as_str()
}

/// Map a 0–4 heuristic score onto the tier scale.
///
/// Returns `None` for anything above 4.
#[must_use]
pub fn describe_score(score: u8) -> Option<StrengthTier> {
    StrengthTier::ALL.get(usize::from(score)).copied()
}

// ---------------------------------------------------------------------------
// External scorer seam
// ---------------------------------------------------------------------------

/// Output of a pattern-aware strength estimator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Guessability score, 0 (trivial) to 4 (very unguessable).
    pub score: u8,
    /// Main weakness found, if any.
    pub warning: Option<String>,
    /// Advice for a stronger password.
    pub suggestions: Vec<String>,
}

/// A dictionary/pattern-aware strength estimator.
///
/// The core never implements one; front ends plug theirs in here.
pub trait StrengthScorer {
    /// Score `password`.
    fn score(&self, password: &str) -> ScoreReport;
}

/// Combined strength view of one password.
///
/// Holds no copy of the password itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    /// Entropy estimate in bits.
    pub entropy_bits: f64,
    /// Tier of [`Self::entropy_bits`].
    pub entropy_strength: StrengthTier,
    /// Heuristic score, when a scorer was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreReport>,
    /// Tier of the heuristic score; `None` without a scorer or if out of range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_strength: Option<StrengthTier>,
}

/// Grade `password` by entropy, and by `scorer` if one is given.
#[must_use]
pub fn analyze_strength(password: &str, scorer: Option<&dyn StrengthScorer>) -> StrengthReport {
    let entropy_bits = calculate_password_entropy(password);
    let score = scorer.map(|s| s.score(password));
    let score_strength = score.as_ref().and_then(|r| describe_score(r.score));
    StrengthReport {
        entropy_bits,
        entropy_strength: describe_strength(entropy_bits),
        score,
        score_strength,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
