//! Judges for each scored dimension.
//!
//! Each judge reads only its own slice of the payload and produces a finding
//! for one [`Dimension`]. Judges never see each other's findings; combining
//! them is the synthesizer's job.
//!
//! ## Judge Independence
//!
//! - No shared mutable state between judges
//! - A judge validates its own input before computing anything
//! - Same input, same finding

mod alignment;
mod color;
mod tolerance;

pub use alignment::{alignment_percent, AlignmentJudge};
pub use color::ColorJudge;
pub use tolerance::{within_tolerance, within_tolerance_of, DEFAULT_TOLERANCE};

use crate::payload::AnalysisResult;
use crate::types::Dimension;
use crate::EvaluationError;

/// Trait implemented by all judges.
pub trait Judge {
    /// The finding this judge produces.
    type Finding;

    /// The dimension this judge scores.
    fn dimension(&self) -> Dimension;

    /// The question this judge answers.
    fn question(&self) -> &'static str {
        self.dimension().question()
    }

    /// Judge the analysis on this judge's dimension.
    ///
    /// Fails with an invalid-input error when the slice of the payload this
    /// judge reads violates a structural invariant.
    fn judge(&self, analysis: &AnalysisResult) -> Result<Self::Finding, EvaluationError>;
}

/// Percentage of `passed` out of `total` checks.
pub(crate) fn pass_share(passed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    passed as f64 / total as f64 * 100.0
}
