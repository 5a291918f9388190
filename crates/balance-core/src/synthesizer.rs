//! Synthesizer: combines judge findings into the final report.
//!
//! The aggregation is fixed:
//! 1. Overall score is the unweighted mean of the color and alignment scores
//! 2. The verdict is BALANCED when the overall score is strictly above the
//!    rubric's overall floor, UNBALANCED otherwise
//!
//! Both sub-scores are already on a 0-100 scale, so the mean is too.

use crate::rubric::Rubric;
use crate::types::{AlignmentJudgment, ColorJudgment, EvaluationReport, Verdict};
use crate::EvaluationError;

/// The Synthesizer assembles findings into an [`EvaluationReport`].
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    rubric: Rubric,
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a caller rubric. Fails if the rubric is out of range.
    pub fn with_rubric(rubric: Rubric) -> Result<Self, EvaluationError> {
        Ok(Self {
            rubric: rubric.checked()?,
        })
    }

    /// Assemble the report from both findings.
    ///
    /// This is a straight composition: no validation happens here because
    /// both findings were produced from validated input.
    pub fn synthesize(&self, color: ColorJudgment, alignment: AlignmentJudgment) -> EvaluationReport {
        let overall_score = overall_score(color.score, alignment.score);

        let verdict = if overall_score > self.rubric.overall_pass {
            Verdict::Balanced
        } else {
            Verdict::Unbalanced
        };

        tracing::debug!(overall_score, ?verdict, "report synthesized");

        EvaluationReport {
            color,
            alignment,
            overall_score,
            verdict,
        }
    }
}

/// Unweighted mean of the two sub-scores.
pub fn overall_score(color_score: f64, alignment_score: f64) -> f64 {
    (color_score + alignment_score) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judges::{AlignmentJudge, ColorJudge, Judge};
    use crate::fixtures::{BALANCED_PAYLOAD_JSON, WEAK_COLOR_PAYLOAD_JSON};
    use crate::payload::AnalysisResult;

    fn findings(json: &str) -> (ColorJudgment, AlignmentJudgment) {
        let analysis = AnalysisResult::from_json(json).unwrap();
        (
            ColorJudge::new().judge(&analysis).unwrap(),
            AlignmentJudge::new().judge(&analysis).unwrap(),
        )
    }

    #[test]
    fn test_overall_is_mean() {
        assert_eq!(overall_score(100.0, 50.0), 75.0);
        assert_eq!(overall_score(0.0, 0.0), 0.0);
        assert_eq!(overall_score(25.0, 0.0), 12.5);
        assert_eq!(overall_score(100.0, 100.0), 100.0);
    }

    #[test]
    fn test_balanced_report() {
        let (color, alignment) = findings(BALANCED_PAYLOAD_JSON);
        let report = Synthesizer::new().synthesize(color, alignment);

        assert_eq!(report.overall_score, 100.0);
        assert_eq!(report.verdict, Verdict::Balanced);
        assert_eq!(report.overall_display(), "100%");
    }

    #[test]
    fn test_findings_passed_through_unchanged() {
        let (color, alignment) = findings(WEAK_COLOR_PAYLOAD_JSON);
        let report = Synthesizer::new().synthesize(color.clone(), alignment.clone());

        assert_eq!(report.color, color);
        assert_eq!(report.alignment, alignment);
        assert_eq!(report.overall_score, 75.0);
    }

    #[test]
    fn test_fifty_is_unbalanced() {
        let (mut color, mut alignment) = findings(BALANCED_PAYLOAD_JSON);
        color.score = 50.0;
        alignment.score = 50.0;

        let report = Synthesizer::new().synthesize(color, alignment);
        assert_eq!(report.overall_score, 50.0);
        assert_eq!(report.verdict, Verdict::Unbalanced);
    }

    #[test]
    fn test_custom_overall_floor() {
        let (color, alignment) = findings(WEAK_COLOR_PAYLOAD_JSON);
        let rubric = Rubric {
            overall_pass: 80.0,
            ..Rubric::default()
        };

        let report = Synthesizer::with_rubric(rubric).unwrap().synthesize(color, alignment);
        assert!(!report.verdict.is_balanced());
    }

    #[test]
    fn test_out_of_range_floor_rejected() {
        let rubric = Rubric {
            overall_pass: 150.0,
            ..Rubric::default()
        };
        let err = Synthesizer::with_rubric(rubric).unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidRubric(_)));
    }
}
