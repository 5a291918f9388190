//! Report types produced by evaluation.
//!
//! Every value here is derived from an [`AnalysisResult`](crate::AnalysisResult)
//! and never mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::payload::{Detection, RgbColor};

/// The two dimensions a screenshot is judged on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Alignment,
    ColorUsage,
}

impl Dimension {
    /// The question this dimension answers.
    pub fn question(&self) -> &'static str {
        match self {
            Dimension::Alignment => "Do elements share common rows and columns?",
            Dimension::ColorUsage => {
                "Do the dominant colors follow the 60-30-10 rule with legible contrast?"
            }
        }
    }
}

/// Positional role of a dominant color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
}

impl ColorRole {
    /// Roles in prevalence order.
    pub const ALL: [ColorRole; 3] = [ColorRole::Primary, ColorRole::Secondary, ColorRole::Accent];

    /// Index into the dominant color list.
    pub fn index(&self) -> usize {
        match self {
            ColorRole::Primary => 0,
            ColorRole::Secondary => 1,
            ColorRole::Accent => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorRole::Primary => "Primary color",
            ColorRole::Secondary => "Secondary color",
            ColorRole::Accent => "Accent color",
        }
    }
}

/// Alignment axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// Key of this axis in the upstream payload.
    pub fn payload_key(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "col",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::Row => "Horizontal (rows)",
            Axis::Column => "Vertical (columns)",
        }
    }
}

/// Judgment of one color role against its target share.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleJudgment {
    pub role: ColorRole,

    /// Display color taken from the dominant color list
    pub color: RgbColor,

    /// Observed share of the image
    pub percent: f64,

    pub target: f64,
    pub tolerance: f64,
    pub pass: bool,
}

/// Judgment of the foreground/background contrast ratio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContrastJudgment {
    pub ratio: f64,

    /// Exclusive lower bound the ratio had to exceed
    pub minimum: f64,

    pub pass: bool,
}

/// Color usage findings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorJudgment {
    pub primary: RoleJudgment,
    pub secondary: RoleJudgment,
    pub accent: RoleJudgment,
    pub contrast: ContrastJudgment,

    /// Share of the four checks that passed, one of 0, 25, 50, 75, 100
    pub score: f64,

    /// Whether the score reaches the rubric's sub-score floor
    pub pass: bool,
}

impl ColorJudgment {
    /// Role judgments in prevalence order.
    pub fn roles(&self) -> [&RoleJudgment; 3] {
        [&self.primary, &self.secondary, &self.accent]
    }

    /// Number of passing checks, contrast included.
    pub fn passes(&self) -> usize {
        self.roles().iter().filter(|r| r.pass).count() + usize::from(self.contrast.pass)
    }
}

/// Judgment of one alignment axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisJudgment {
    pub axis: Axis,

    /// Aligned groups found upstream
    pub count: u32,

    pub misaligned_percent: f64,

    /// `100 - misaligned_percent`
    pub alignment_percent: f64,

    pub pass: bool,

    /// Carried through for display; not scored
    #[serde(default)]
    pub skipped: Vec<Detection>,
}

/// Alignment findings for both axes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlignmentJudgment {
    pub row: AxisJudgment,
    pub column: AxisJudgment,

    /// Share of passing axes, one of 0, 50, 100
    pub score: f64,

    /// Whether the score reaches the rubric's sub-score floor
    pub pass: bool,
}

impl AlignmentJudgment {
    pub fn axes(&self) -> [&AxisJudgment; 2] {
        [&self.row, &self.column]
    }

    pub fn passes(&self) -> usize {
        self.axes().iter().filter(|a| a.pass).count()
    }
}

/// Headline verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Overall score above the rubric's overall floor
    Balanced,
    Unbalanced,
}

impl Verdict {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Verdict::Balanced)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Balanced => write!(f, "BALANCED"),
            Verdict::Unbalanced => write!(f, "UNBALANCED"),
        }
    }
}

/// Complete evaluation of one analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationReport {
    pub color: ColorJudgment,
    pub alignment: AlignmentJudgment,

    /// Unweighted mean of the color and alignment scores
    pub overall_score: f64,

    pub verdict: Verdict,
}

impl EvaluationReport {
    /// Overall score rounded to a whole percent, as shown to users.
    pub fn overall_display(&self) -> String {
        format!("{:.0}%", self.overall_score)
    }
}
