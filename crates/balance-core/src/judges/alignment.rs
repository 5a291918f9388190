//! Alignment Judge
//!
//! Question: "Do elements share common rows and columns?"
//!
//! Each axis reports the percentage of misaligned elements. The alignment
//! percent is its complement, and an axis passes when that reaches the
//! rubric floor (inclusive). The score is the share of passing axes.
//! Skipped detections ride along untouched.

use super::{pass_share, Judge};
use crate::payload::{validate_axis, AnalysisResult, AxisAlignmentStats};
use crate::rubric::Rubric;
use crate::types::{AlignmentJudgment, Axis, AxisJudgment, Dimension};
use crate::EvaluationError;

const AXIS_CHECKS: usize = 2;

/// The Alignment Judge.
#[derive(Debug, Clone, Default)]
pub struct AlignmentJudge {
    rubric: Rubric,
}

impl AlignmentJudge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a caller rubric. Fails if the rubric is out of range.
    pub fn with_rubric(rubric: Rubric) -> Result<Self, EvaluationError> {
        Ok(Self {
            rubric: rubric.checked()?,
        })
    }

    /// Judge row and column statistics directly.
    pub fn judge_axes(
        &self,
        row: &AxisAlignmentStats,
        column: &AxisAlignmentStats,
    ) -> Result<AlignmentJudgment, EvaluationError> {
        validate_axis(Axis::Row.payload_key(), row)?;
        validate_axis(Axis::Column.payload_key(), column)?;

        let row = self.judge_axis(Axis::Row, row);
        let column = self.judge_axis(Axis::Column, column);

        let passed = usize::from(row.pass) + usize::from(column.pass);
        let score = pass_share(passed, AXIS_CHECKS);

        tracing::debug!(
            row = row.alignment_percent,
            column = column.alignment_percent,
            score,
            "alignment judged"
        );

        Ok(AlignmentJudgment {
            row,
            column,
            score,
            pass: score >= self.rubric.sub_score_pass,
        })
    }

    fn judge_axis(&self, axis: Axis, stats: &AxisAlignmentStats) -> AxisJudgment {
        let alignment_percent = alignment_percent(stats.misaligned_percent);

        AxisJudgment {
            axis,
            count: stats.count,
            misaligned_percent: stats.misaligned_percent,
            alignment_percent,
            pass: alignment_percent >= self.rubric.axis_pass_percent,
            skipped: stats.skipped.clone(),
        }
    }
}

/// Share of aligned elements given the misaligned share.
pub fn alignment_percent(misaligned_percent: f64) -> f64 {
    100.0 - misaligned_percent
}

impl Judge for AlignmentJudge {
    type Finding = AlignmentJudgment;

    fn dimension(&self) -> Dimension {
        Dimension::Alignment
    }

    fn judge(&self, analysis: &AnalysisResult) -> Result<AlignmentJudgment, EvaluationError> {
        self.judge_axes(&analysis.row, &analysis.col)
    }
}
