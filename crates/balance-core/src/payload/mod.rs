//! Upstream analysis payload.
//!
//! The payload arrives as JSON from the detection service. This module
//! deserializes it and checks the structural invariants the judges rely on.

mod parser;
mod validation;

pub use parser::{
    AnalysisResult, AxisAlignmentStats, ColorStats, Detection, PayloadError, RgbColor,
};
pub use validation::{
    check_finite, check_percent, validate_analysis, validate_axis, validate_color_stats,
    validate_detection, REQUIRED_COLOR_ROLES,
};
