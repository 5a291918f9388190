//! Structural checks on an [`AnalysisResult`].
//!
//! Every check reports the first violation it finds together with the path of
//! the offending field. Nothing is clamped or defaulted.

use super::parser::{AnalysisResult, AxisAlignmentStats, ColorStats, Detection};
use crate::EvaluationError;

/// Minimum number of color entries: primary, secondary, accent.
pub const REQUIRED_COLOR_ROLES: usize = 3;

/// Reject NaN and infinities.
pub fn check_finite(field: &str, value: f64) -> Result<f64, EvaluationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluationError::NonFiniteValue {
            field: field.to_string(),
            value,
        })
    }
}

/// Require a finite value in [0, 100].
pub fn check_percent(field: &str, value: f64) -> Result<f64, EvaluationError> {
    check_finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(EvaluationError::invalid(
            field,
            format!("{} is not a percentage in [0, 100]", value),
        ));
    }
    Ok(value)
}

/// Validate the whole payload.
pub fn validate_analysis(result: &AnalysisResult) -> Result<(), EvaluationError> {
    validate_axis("row", &result.row)?;
    validate_axis("col", &result.col)?;
    validate_color_stats(&result.color)?;

    for (i, detection) in result.skipped_detections.iter().enumerate() {
        validate_detection(&format!("skipped_detections[{}]", i), detection)?;
    }

    Ok(())
}

/// Validate one axis. `axis` is the payload key (`row` or `col`).
pub fn validate_axis(axis: &str, stats: &AxisAlignmentStats) -> Result<(), EvaluationError> {
    check_percent(&format!("{}.misaligned", axis), stats.misaligned_percent)?;

    for (i, detection) in stats.skipped.iter().enumerate() {
        validate_detection(&format!("{}.skipped[{}]", axis, i), detection)?;
    }

    Ok(())
}

/// Validate color statistics.
///
/// Requires at least [`REQUIRED_COLOR_ROLES`] entries, equal lengths,
/// index-aligned colors, percentages in range and a contrast ratio of at
/// least 1.
pub fn validate_color_stats(stats: &ColorStats) -> Result<(), EvaluationError> {
    let ratio = check_finite("color.contrast_ratio", stats.contrast_ratio)?;
    if ratio < 1.0 {
        return Err(EvaluationError::invalid(
            "color.contrast_ratio",
            format!("{} is below the minimum possible ratio of 1.0", ratio),
        ));
    }

    if stats.percentages.len() < REQUIRED_COLOR_ROLES {
        return Err(EvaluationError::invalid(
            "color.percentages",
            format!(
                "expected at least {} entries, found {}",
                REQUIRED_COLOR_ROLES,
                stats.percentages.len()
            ),
        ));
    }

    if stats.dominant_colors.len() != stats.percentages.len() {
        return Err(EvaluationError::invalid(
            "color.dominant_colors",
            format!(
                "has {} entries but percentages has {}",
                stats.dominant_colors.len(),
                stats.percentages.len()
            ),
        ));
    }

    for (i, ((dominant, _), (color, percent))) in stats
        .dominant_colors
        .iter()
        .zip(stats.percentages.iter())
        .enumerate()
    {
        if dominant != color {
            return Err(EvaluationError::invalid(
                &format!("color.percentages[{}].color", i),
                format!("{} does not match dominant_colors[{}] {}", color, i, dominant),
            ));
        }
        check_percent(&format!("color.percentages[{}].percent", i), *percent)?;
    }

    Ok(())
}

/// Validate a detection's numeric fields.
pub fn validate_detection(field: &str, detection: &Detection) -> Result<(), EvaluationError> {
    let confidence = check_finite(&format!("{}.confidence", field), detection.confidence)?;
    if !(0.0..=1.0).contains(&confidence) {
        return Err(EvaluationError::invalid(
            &format!("{}.confidence", field),
            format!("{} is outside [0, 1]", confidence),
        ));
    }

    let dimensions = [
        ("x", detection.x),
        ("y", detection.y),
        ("width", detection.width),
        ("height", detection.height),
    ];
    for (name, value) in dimensions {
        let path = format!("{}.{}", field, name);
        check_finite(&path, value)?;
        if value < 0.0 {
            return Err(EvaluationError::invalid(&path, format!("{} is negative", value)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{BALANCED_PAYLOAD_JSON, SKIPPED_PAYLOAD_JSON, TWO_COLOR_PAYLOAD_JSON};
    use crate::payload::RgbColor;

    fn balanced() -> AnalysisResult {
        AnalysisResult::from_json(BALANCED_PAYLOAD_JSON).unwrap()
    }

    #[test]
    fn test_valid_payloads_pass() {
        assert!(validate_analysis(&balanced()).is_ok());
        let skipped = AnalysisResult::from_json(SKIPPED_PAYLOAD_JSON).unwrap();
        assert!(validate_analysis(&skipped).is_ok());
    }

    #[test]
    fn test_two_colors_rejected() {
        let result = AnalysisResult::from_json(TWO_COLOR_PAYLOAD_JSON).unwrap();
        let err = validate_analysis(&result).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.field(), Some("color.percentages"));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut result = balanced();
        result.color.dominant_colors.push((RgbColor(1, 2, 3), 5));
        let err = validate_color_stats(&result.color).unwrap_err();
        assert_eq!(err.field(), Some("color.dominant_colors"));
    }

    #[test]
    fn test_color_mismatch_rejected() {
        let mut result = balanced();
        result.color.percentages[1].0 = RgbColor(9, 9, 9);
        let err = validate_color_stats(&result.color).unwrap_err();
        assert_eq!(err.field(), Some("color.percentages[1].color"));
    }

    #[test]
    fn test_percent_out_of_range_rejected() {
        let mut result = balanced();
        result.color.percentages[2].1 = 101.0;
        let err = validate_color_stats(&result.color).unwrap_err();
        assert_eq!(err.field(), Some("color.percentages[2].percent"));
    }

    #[test]
    fn test_non_finite_percent_rejected() {
        let mut result = balanced();
        result.color.percentages[0].1 = f64::NAN;
        let err = validate_color_stats(&result.color).unwrap_err();
        assert!(matches!(err, EvaluationError::NonFiniteValue { .. }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_contrast_below_one_rejected() {
        let mut result = balanced();
        result.color.contrast_ratio = 0.5;
        let err = validate_color_stats(&result.color).unwrap_err();
        assert_eq!(err.field(), Some("color.contrast_ratio"));

        result.color.contrast_ratio = f64::INFINITY;
        let err = validate_color_stats(&result.color).unwrap_err();
        assert!(matches!(err, EvaluationError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_misaligned_out_of_range_rejected() {
        let mut result = balanced();
        result.col.misaligned_percent = -0.1;
        let err = validate_analysis(&result).unwrap_err();
        assert_eq!(err.field(), Some("col.misaligned"));
    }

    #[test]
    fn test_misaligned_bounds_accepted() {
        let mut result = balanced();
        result.row.misaligned_percent = 0.0;
        result.col.misaligned_percent = 100.0;
        assert!(validate_analysis(&result).is_ok());
    }

    #[test]
    fn test_bad_skipped_detection_rejected() {
        let mut result = AnalysisResult::from_json(SKIPPED_PAYLOAD_JSON).unwrap();
        result.row.skipped[0].width = -4.0;
        let err = validate_analysis(&result).unwrap_err();
        assert_eq!(err.field(), Some("row.skipped[0].width"));
        assert!(err.to_string().ends_with("-4 is negative"));

        let mut result = AnalysisResult::from_json(SKIPPED_PAYLOAD_JSON).unwrap();
        result.skipped_detections[1].confidence = 1.5;
        let err = validate_analysis(&result).unwrap_err();
        assert_eq!(err.field(), Some("skipped_detections[1].confidence"));
    }
}
