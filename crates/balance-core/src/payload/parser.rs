//! Analysis payload model and loaders.
//!
//! The payload is produced upstream by the detection service. Field names
//! follow its wire format exactly so a response body deserializes as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a payload.
///
/// Syntax errors keep the parser error as their source. A document that
/// parses but lacks a required field, or holds a value of the wrong type or
/// range, is [`PayloadError::InvalidShape`].
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Failed to read payload file")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Payload does not match the analysis format: {0}")]
    InvalidShape(String),
}

impl PayloadError {
    /// True when the document was readable but violates the payload shape.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PayloadError::InvalidShape(_))
    }
}

/// An sRGB color, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Hex form, e.g. `#1e90ff`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.0, self.1, self.2)
    }
}

/// One detected interface element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Detection {
    pub class_id: u32,
    pub class_label: String,

    /// Detector confidence in [0, 1]
    pub confidence: f64,

    /// Opaque identifier assigned upstream
    pub detection_id: String,

    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Alignment statistics for one axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisAlignmentStats {
    /// Number of aligned groups found on this axis
    pub count: u32,

    /// Percentage (not a count) of elements judged misaligned
    #[serde(rename = "misaligned")]
    pub misaligned_percent: f64,

    /// Elements left out of grouping; never scored
    #[serde(default)]
    pub skipped: Vec<Detection>,
}

/// Dominant color and contrast statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorStats {
    pub contrast_ratio: f64,

    /// Colors by descending pixel count
    pub dominant_colors: Vec<(RgbColor, u64)>,

    /// Same colors, same order, as image percentages
    pub percentages: Vec<(RgbColor, f64)>,
}

/// The complete upstream analysis of one screenshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Row (horizontal) alignment
    pub row: AxisAlignmentStats,

    /// Column (vertical) alignment
    pub col: AxisAlignmentStats,

    pub color: ColorStats,

    /// Opaque reference to the analysed image (URL or data URI)
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub skipped_detections: Vec<Detection>,
}

impl AnalysisResult {
    /// Parse a payload from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| match e.classify() {
            serde_json::error::Category::Data => PayloadError::InvalidShape(e.to_string()),
            _ => PayloadError::JsonError(e),
        })
    }

    /// Parse a payload from a YAML string.
    ///
    /// The document is parsed in two steps so syntax errors and shape errors
    /// stay distinguishable.
    pub fn from_yaml(yaml: &str) -> Result<Self, PayloadError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        serde_yaml::from_value(value).map_err(|e| PayloadError::InvalidShape(e.to_string()))
    }

    /// Load a payload from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PayloadError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a payload from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, PayloadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load a payload, choosing the format from the file extension.
    ///
    /// `.yaml` and `.yml` are read as YAML; anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PayloadError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .map(|e| e == "yaml" || e == "yml")
            .unwrap_or(false);

        if is_yaml {
            Self::from_yaml_file(path)
        } else {
            Self::from_json_file(path)
        }
    }

    /// Total number of skipped detections across both axes.
    pub fn skipped_on_axes(&self) -> usize {
        self.row.skipped.len() + self.col.skipped.len()
    }
}
