//! Color Usage Judge
//!
//! Question: "Do the dominant colors follow the 60-30-10 rule with legible contrast?"
//!
//! The three most prevalent colors take the primary, secondary and accent
//! roles by position. Each role passes when its share is within the rubric
//! tolerance of its target. Contrast passes when the ratio is strictly above
//! [`Rubric::MIN_CONTRAST_RATIO`]. The score is the share of those four
//! checks that passed.

use super::tolerance::within_tolerance_of;
use super::{pass_share, Judge};
use crate::payload::{validate_color_stats, AnalysisResult, ColorStats};
use crate::rubric::Rubric;
use crate::types::{ColorJudgment, ColorRole, ContrastJudgment, Dimension, RoleJudgment};
use crate::EvaluationError;

/// Number of checks contributing to the color score.
const COLOR_CHECKS: usize = 4;

/// The Color Usage Judge.
#[derive(Debug, Clone, Default)]
pub struct ColorJudge {
    rubric: Rubric,
}

impl ColorJudge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a caller rubric. Fails if the rubric is out of range.
    pub fn with_rubric(rubric: Rubric) -> Result<Self, EvaluationError> {
        Ok(Self {
            rubric: rubric.checked()?,
        })
    }

    /// Judge color statistics directly.
    pub fn judge_stats(&self, stats: &ColorStats) -> Result<ColorJudgment, EvaluationError> {
        validate_color_stats(stats)?;

        let [primary, secondary, accent] = ColorRole::ALL.map(|role| self.judge_role(stats, role));
        let contrast = self.judge_contrast(stats.contrast_ratio);

        let passed = [primary.pass, secondary.pass, accent.pass, contrast.pass]
            .iter()
            .filter(|p| **p)
            .count();
        let score = pass_share(passed, COLOR_CHECKS);

        tracing::debug!(passed, score, "color usage judged");

        Ok(ColorJudgment {
            primary,
            secondary,
            accent,
            contrast,
            score,
            pass: score >= self.rubric.sub_score_pass,
        })
    }

    /// Judge one role. Stats must already be validated.
    fn judge_role(&self, stats: &ColorStats, role: ColorRole) -> RoleJudgment {
        let i = role.index();
        let percent = stats.percentages[i].1;
        let target = self.rubric.target_for(role);
        let tolerance = self.rubric.role_tolerance;

        RoleJudgment {
            role,
            color: stats.dominant_colors[i].0,
            percent,
            target,
            tolerance,
            pass: within_tolerance_of(percent, target, tolerance),
        }
    }

    fn judge_contrast(&self, ratio: f64) -> ContrastJudgment {
        ContrastJudgment {
            ratio,
            minimum: Rubric::MIN_CONTRAST_RATIO,
            pass: ratio > Rubric::MIN_CONTRAST_RATIO,
        }
    }
}

impl Judge for ColorJudge {
    type Finding = ColorJudgment;

    fn dimension(&self) -> Dimension {
        Dimension::ColorUsage
    }

    fn judge(&self, analysis: &AnalysisResult) -> Result<ColorJudgment, EvaluationError> {
        self.judge_stats(&analysis.color)
    }
}
