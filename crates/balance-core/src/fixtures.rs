//! Payload fixtures shared by unit tests and downstream crates.
//!
//! Each fixture is a complete upstream payload in wire format. The expected
//! outcome is stated next to each one so callers can assert against it.

/// All color roles on target, contrast 4.0, row 10% / column 40% misaligned.
///
/// Expected: color 100, alignment 100, overall 100, balanced.
pub const BALANCED_PAYLOAD_JSON: &str = r#"{
  "row": { "count": 4, "misaligned": 10, "skipped": [] },
  "col": { "count": 3, "misaligned": 40, "skipped": [] },
  "color": {
    "contrast_ratio": 4.0,
    "dominant_colors": [[[255, 255, 255], 60000], [[30, 144, 255], 30000], [[0, 0, 0], 10000]],
    "percentages": [[[255, 255, 255], 60], [[30, 144, 255], 30], [[0, 0, 0], 10]]
  },
  "image": "https://uploads.example.com/shot.png",
  "skipped_detections": []
}"#;

/// Primary color at 50%, contrast 2.0, both axes aligned.
///
/// Expected: color 50, alignment 100, overall 75, balanced.
pub const WEAK_COLOR_PAYLOAD_JSON: &str = r#"{
  "row": { "count": 5, "misaligned": 0, "skipped": [] },
  "col": { "count": 2, "misaligned": 20, "skipped": [] },
  "color": {
    "contrast_ratio": 2.0,
    "dominant_colors": [[[240, 240, 240], 50000], [[40, 40, 40], 30000], [[220, 20, 60], 10000], [[128, 128, 128], 10000]],
    "percentages": [[[240, 240, 240], 50], [[40, 40, 40], 30], [[220, 20, 60], 10], [[128, 128, 128], 10]]
  },
  "image": "data:image/png;base64,iVBORw0KGgo=",
  "skipped_detections": []
}"#;

/// Balanced colors with one skipped element per axis.
///
/// Expected: color 100, row 85 (pass), column 30 (fail), alignment 50,
/// overall 75, balanced.
pub const SKIPPED_PAYLOAD_JSON: &str = r#"{
  "row": {
    "count": 3,
    "misaligned": 15,
    "skipped": [
      { "class_id": 2, "class_label": "button", "confidence": 0.91, "detection_id": "det-7",
        "x": 40, "y": 300, "width": 120, "height": 36 }
    ]
  },
  "col": {
    "count": 1,
    "misaligned": 70,
    "skipped": [
      { "class_id": 5, "class_label": "image", "confidence": 0.78, "detection_id": "det-9",
        "x": 610, "y": 80, "width": 240, "height": 180 }
    ]
  },
  "color": {
    "contrast_ratio": 5.5,
    "dominant_colors": [[[250, 250, 250], 610], [[33, 33, 33], 290], [[255, 87, 34], 100]],
    "percentages": [[[250, 250, 250], 61], [[33, 33, 33], 29], [[255, 87, 34], 10]]
  },
  "image": "https://uploads.example.com/form.png",
  "skipped_detections": [
    { "class_id": 2, "class_label": "button", "confidence": 0.91, "detection_id": "det-7",
      "x": 40, "y": 300, "width": 120, "height": 36 },
    { "class_id": 5, "class_label": "image", "confidence": 0.78, "detection_id": "det-9",
      "x": 610, "y": 80, "width": 240, "height": 180 }
  ]
}"#;

/// Only two color entries.
///
/// Expected: invalid input at `color.percentages`.
pub const TWO_COLOR_PAYLOAD_JSON: &str = r#"{
  "row": { "count": 1, "misaligned": 0, "skipped": [] },
  "col": { "count": 1, "misaligned": 0, "skipped": [] },
  "color": {
    "contrast_ratio": 4.5,
    "dominant_colors": [[[255, 255, 255], 700], [[0, 0, 0], 300]],
    "percentages": [[[255, 255, 255], 70], [[0, 0, 0], 30]]
  },
  "image": "https://uploads.example.com/two.png",
  "skipped_detections": []
}"#;
