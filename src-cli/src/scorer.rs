//! Pattern-aware strength scoring backed by `zxcvbn`.

use zxcvbn::feedback::Feedback;
use zxcvbn::zxcvbn;

use keysmith_core::{ScoreReport, StrengthScorer};

/// [`StrengthScorer`] that runs the `zxcvbn` estimator with no user inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnScorer;

impl StrengthScorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> ScoreReport {
        if password.is_empty() {
            return ScoreReport::default();
        }
        let estimate = zxcvbn(password, &[]);
        let feedback = estimate.feedback();
        ScoreReport {
            score: u8::from(estimate.score()),
            warning: feedback.and_then(Feedback::warning).map(|w| w.to_string()),
            suggestions: feedback
                .map(|f| f.suggestions().iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
        }
    }
}
