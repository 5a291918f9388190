//! Scoring rubric: the named design values every judgment is measured against.
//!
//! The defaults encode the 60-30-10 color rule, a ±3 point tolerance and a
//! 50% alignment floor. A rubric can be loaded from YAML or JSON; any field
//! left out keeps its default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::EvaluationError;

/// Expected share of the primary (most prevalent) color.
pub const PRIMARY_TARGET_PERCENT: f64 = 60.0;

/// Expected share of the secondary color.
pub const SECONDARY_TARGET_PERCENT: f64 = 30.0;

/// Expected share of the accent color.
pub const ACCENT_TARGET_PERCENT: f64 = 10.0;

/// Allowed deviation, in percentage points, from each role target.
pub const ROLE_TOLERANCE_PERCENT: f64 = 3.0;

/// Minimum alignment percent (inclusive) for an axis to pass.
pub const AXIS_PASS_PERCENT: f64 = 50.0;

/// Minimum sub-score (inclusive) for color usage or alignment to pass.
pub const SUB_SCORE_PASS: f64 = 50.0;

/// Overall score must exceed this (strictly) for a balanced verdict.
pub const OVERALL_PASS: f64 = 50.0;

/// Errors that can occur when loading a rubric.
#[derive(Error, Debug)]
pub enum RubricError {
    #[error("Failed to read rubric file")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON")]
    JsonError(#[from] serde_json::Error),

    #[error("Rubric validation failed: {0}")]
    ValidationError(String),
}

/// Thresholds used by the judges and the synthesizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rubric {
    #[serde(default = "default_primary_target")]
    pub primary_target: f64,

    #[serde(default = "default_secondary_target")]
    pub secondary_target: f64,

    #[serde(default = "default_accent_target")]
    pub accent_target: f64,

    /// Symmetric, inclusive tolerance around each role target
    #[serde(default = "default_role_tolerance")]
    pub role_tolerance: f64,

    /// Inclusive alignment floor per axis
    #[serde(default = "default_axis_pass")]
    pub axis_pass_percent: f64,

    /// Inclusive floor for the color and alignment sub-score verdicts
    #[serde(default = "default_sub_score_pass")]
    pub sub_score_pass: f64,

    /// Strict floor for the overall verdict
    #[serde(default = "default_overall_pass")]
    pub overall_pass: f64,
}

fn default_primary_target() -> f64 {
    PRIMARY_TARGET_PERCENT
}

fn default_secondary_target() -> f64 {
    SECONDARY_TARGET_PERCENT
}

fn default_accent_target() -> f64 {
    ACCENT_TARGET_PERCENT
}

fn default_role_tolerance() -> f64 {
    ROLE_TOLERANCE_PERCENT
}

fn default_axis_pass() -> f64 {
    AXIS_PASS_PERCENT
}

fn default_sub_score_pass() -> f64 {
    SUB_SCORE_PASS
}

fn default_overall_pass() -> f64 {
    OVERALL_PASS
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            primary_target: PRIMARY_TARGET_PERCENT,
            secondary_target: SECONDARY_TARGET_PERCENT,
            accent_target: ACCENT_TARGET_PERCENT,
            role_tolerance: ROLE_TOLERANCE_PERCENT,
            axis_pass_percent: AXIS_PASS_PERCENT,
            sub_score_pass: SUB_SCORE_PASS,
            overall_pass: OVERALL_PASS,
        }
    }
}

impl Rubric {
    /// Contrast ratio must be strictly greater than this to pass.
    ///
    /// This is a compile-time constant, not part of the loadable rubric: it
    /// approximates the minimum legible contrast and is not a tuning knob.
    pub const MIN_CONTRAST_RATIO: f64 = 3.0;

    /// Parse a rubric from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, RubricError> {
        let rubric: Rubric = serde_yaml::from_str(yaml)?;
        rubric.validate()?;
        Ok(rubric)
    }

    /// Parse a rubric from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, RubricError> {
        let rubric: Rubric = serde_json::from_str(json)?;
        rubric.validate()?;
        Ok(rubric)
    }

    /// Load a rubric, choosing the format from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RubricError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Target percent for a color role.
    pub fn target_for(&self, role: crate::types::ColorRole) -> f64 {
        use crate::types::ColorRole;
        match role {
            ColorRole::Primary => self.primary_target,
            ColorRole::Secondary => self.secondary_target,
            ColorRole::Accent => self.accent_target,
        }
    }

    /// Validate and convert a rejection into an evaluation error.
    pub(crate) fn checked(self) -> Result<Self, EvaluationError> {
        self.validate().map_err(|e| match e {
            RubricError::ValidationError(reason) => EvaluationError::InvalidRubric(reason),
            other => EvaluationError::InvalidRubric(other.to_string()),
        })?;
        Ok(self)
    }

    /// Check that every value is finite and in range.
    pub fn validate(&self) -> Result<(), RubricError> {
        let percents = [
            ("primary_target", self.primary_target),
            ("secondary_target", self.secondary_target),
            ("accent_target", self.accent_target),
            ("axis_pass_percent", self.axis_pass_percent),
            ("sub_score_pass", self.sub_score_pass),
            ("overall_pass", self.overall_pass),
        ];

        for (name, value) in percents {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(RubricError::ValidationError(format!(
                    "{} must be within [0, 100], got {}",
                    name, value
                )));
            }
        }

        if !self.role_tolerance.is_finite() || self.role_tolerance < 0.0 {
            return Err(RubricError::ValidationError(format!(
                "role_tolerance must be a non-negative number, got {}",
                self.role_tolerance
            )));
        }

        Ok(())
    }
}
