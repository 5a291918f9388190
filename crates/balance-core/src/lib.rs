//! # balance-core
//!
//! Deterministic layout-balance and color-usage scoring for UI screenshots.
//!
//! An upstream detection service analyses a screenshot and reports detected
//! elements, per-axis alignment statistics and dominant colors. This crate
//! turns that analysis into pass/fail judgments and three scores:
//! - color usage (60-30-10 rule plus contrast)
//! - alignment (rows and columns)
//! - overall (mean of the two)
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same analysis always produces the same report
//! 2. **Pure**: No I/O, clock or randomness during evaluation
//! 3. **Fail fast**: Invalid input is rejected with the offending field path
//!    before any judgment is computed
//! 4. **Parallel-safe**: Judges share no state and may run from any thread
//!
//! ## Example
//!
//! ```rust,ignore
//! use balance_core::{AnalysisResult, evaluate};
//!
//! let analysis = AnalysisResult::from_json_file("analysis.json")?;
//! let report = evaluate(&analysis)?;
//!
//! println!("Overall: {}", report.overall_display());
//! println!("Color: {} / Alignment: {}", report.color.score, report.alignment.score);
//! ```

pub mod fixtures;
pub mod judges;
pub mod payload;
pub mod rubric;
pub mod synthesizer;
pub mod types;

// Re-export main types at crate root
pub use judges::{within_tolerance, AlignmentJudge, ColorJudge, Judge};
pub use payload::{
    validate_analysis, AnalysisResult, AxisAlignmentStats, ColorStats, Detection, PayloadError,
    RgbColor,
};
pub use rubric::{Rubric, RubricError};
pub use synthesizer::Synthesizer;
pub use types::{
    AlignmentJudgment, Axis, AxisJudgment, ColorJudgment, ColorRole, ContrastJudgment, Dimension,
    EvaluationReport, RoleJudgment, Verdict,
};

use thiserror::Error;

/// Errors that can occur during evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("Invalid input at `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Non-finite value at `{field}`: {value}")]
    NonFiniteValue { field: String, value: f64 },

    #[error("Invalid rubric: {0}")]
    InvalidRubric(String),
}

impl EvaluationError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        EvaluationError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Path of the offending payload field, if the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            EvaluationError::InvalidInput { field, .. }
            | EvaluationError::NonFiniteValue { field, .. } => Some(field),
            EvaluationError::InvalidRubric(_) => None,
        }
    }

    /// Non-finite values are a kind of invalid input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EvaluationError::InvalidInput { .. } | EvaluationError::NonFiniteValue { .. }
        )
    }
}

/// Evaluate an analysis with the default rubric.
///
/// This is the main entry point.
///
/// # Returns
///
/// An `EvaluationReport` containing:
/// - `color`: role and contrast judgments plus the color score
/// - `alignment`: row and column judgments plus the alignment score
/// - `overall_score` and `verdict`
pub fn evaluate(analysis: &AnalysisResult) -> Result<EvaluationReport, EvaluationError> {
    evaluate_with_rubric(analysis, &Rubric::default())
}

/// Evaluate an analysis against an explicit rubric.
///
/// The whole analysis is validated up front; on error no judge runs.
///
/// # Arguments
///
/// * `analysis` - The upstream analysis payload
/// * `rubric` - Targets and thresholds to judge against
pub fn evaluate_with_rubric(
    analysis: &AnalysisResult,
    rubric: &Rubric,
) -> Result<EvaluationReport, EvaluationError> {
    let color_judge = ColorJudge::with_rubric(*rubric)?;
    let alignment_judge = AlignmentJudge::with_rubric(*rubric)?;
    let synthesizer = Synthesizer::with_rubric(*rubric)?;

    validate_analysis(analysis)?;

    let color = color_judge.judge(analysis)?;
    let alignment = alignment_judge.judge(analysis)?;

    Ok(synthesizer.synthesize(color, alignment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        BALANCED_PAYLOAD_JSON, SKIPPED_PAYLOAD_JSON, TWO_COLOR_PAYLOAD_JSON,
        WEAK_COLOR_PAYLOAD_JSON,
    };

    fn payload(json: &str) -> AnalysisResult {
        AnalysisResult::from_json(json).unwrap()
    }

    #[test]
    fn test_everything_passes() {
        let report = evaluate(&payload(BALANCED_PAYLOAD_JSON)).unwrap();

        assert_eq!(report.color.score, 100.0);
        assert_eq!(report.alignment.row.alignment_percent, 90.0);
        assert_eq!(report.alignment.column.alignment_percent, 60.0);
        assert_eq!(report.alignment.score, 100.0);
        assert_eq!(report.overall_score, 100.0);
        assert!(report.verdict.is_balanced());
    }

    #[test]
    fn test_row_misaligned() {
        let mut analysis = payload(BALANCED_PAYLOAD_JSON);
        analysis.row.misaligned_percent = 60.0;

        let report = evaluate(&analysis).unwrap();
        assert_eq!(report.alignment.row.alignment_percent, 40.0);
        assert!(!report.alignment.row.pass);
        assert!(report.alignment.column.pass);
        assert_eq!(report.alignment.score, 50.0);
        assert_eq!(report.overall_score, 75.0);
    }

    #[test]
    fn test_weak_colors() {
        let report = evaluate(&payload(WEAK_COLOR_PAYLOAD_JSON)).unwrap();

        assert!(!report.color.primary.pass);
        assert!(report.color.secondary.pass);
        assert!(report.color.accent.pass);
        assert!(!report.color.contrast.pass);
        assert_eq!(report.color.score, 50.0);
        assert_eq!(report.alignment.score, 100.0);
        assert_eq!(report.overall_score, 75.0);
    }

    #[test]
    fn test_two_colors_rejected_without_report() {
        let err = evaluate(&payload(TWO_COLOR_PAYLOAD_JSON)).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.field(), Some("color.percentages"));
    }

    #[test]
    fn test_row_exactly_half_misaligned_passes() {
        let mut analysis = payload(BALANCED_PAYLOAD_JSON);
        analysis.row.misaligned_percent = 50.0;

        let report = evaluate(&analysis).unwrap();
        assert_eq!(report.alignment.row.alignment_percent, 50.0);
        assert!(report.alignment.row.pass);
    }

    #[test]
    fn test_skipped_detections_reach_report() {
        let analysis = payload(SKIPPED_PAYLOAD_JSON);
        let report = evaluate(&analysis).unwrap();

        assert_eq!(report.alignment.row.skipped, analysis.row.skipped);
        assert_eq!(report.alignment.column.skipped, analysis.col.skipped);
        assert!(report.alignment.row.pass);
        assert!(!report.alignment.column.pass);
        assert_eq!(report.overall_score, 75.0);
        assert_eq!(report.verdict, Verdict::Balanced);
    }

    #[test]
    fn test_invalid_alignment_blocks_valid_color() {
        // Color is fine but alignment is not: no partial report.
        let mut analysis = payload(BALANCED_PAYLOAD_JSON);
        analysis.col.misaligned_percent = f64::INFINITY;

        let err = evaluate(&analysis).unwrap_err();
        assert_eq!(err.field(), Some("col.misaligned"));
    }

    #[test]
    fn test_invalid_rubric_rejected() {
        let rubric = Rubric {
            overall_pass: f64::NAN,
            ..Rubric::default()
        };
        let err = evaluate_with_rubric(&payload(BALANCED_PAYLOAD_JSON), &rubric).unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidRubric(_)));
        assert!(!err.is_invalid_input());
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_error_message_names_field() {
        let err = evaluate(&payload(TWO_COLOR_PAYLOAD_JSON)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("color.percentages"));
        assert!(message.contains("at least 3"));
    }

    #[test]
    fn test_report_serializes() {
        let report = evaluate(&payload(BALANCED_PAYLOAD_JSON)).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["overall_score"], 100.0);
        assert_eq!(json["verdict"], "balanced");
        assert_eq!(json["color"]["primary"]["role"], "primary");
        assert_eq!(json["color"]["primary"]["color"], serde_json::json!([255, 255, 255]));
        assert_eq!(json["alignment"]["column"]["axis"], "column");
    }
}
