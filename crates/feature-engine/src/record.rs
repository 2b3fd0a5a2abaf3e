//! Feature Record Assembly
//!
//! Every extractor produces a fixed group of named values. The key lists
//! below are the default-value policy table: a group that cannot be
//! computed contributes every one of its keys with value 0.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Numeric session metadata columns
pub const METADATA_KEYS: [&str; 3] = ["created_at", "stroke_count", "total_points"];

pub const KINEMATIC_KEYS: [&str; 9] = [
    "velocity_mean",
    "velocity_std",
    "velocity_max",
    "acceleration_mean",
    "acceleration_std",
    "jerk_mean",
    "jerk_std",
    "path_length_total",
    "path_length_mean",
];

pub const SPATIAL_KEYS: [&str; 7] = [
    "bounding_box_width",
    "bounding_box_height",
    "bounding_box_area",
    "canvas_coverage",
    "center_offset_x",
    "center_offset_y",
    "center_offset_total",
];

pub const TEMPORAL_KEYS: [&str; 8] = [
    "stroke_duration_mean",
    "stroke_duration_std",
    "stroke_duration_max",
    "inter_stroke_pause_mean",
    "inter_stroke_pause_std",
    "inter_stroke_pause_max",
    "total_pause_time",
    "total_drawing_time",
];

pub const PRESSURE_KEYS: [&str; 6] = [
    "pressure_mean",
    "pressure_std",
    "pressure_min",
    "pressure_max",
    "pressure_range",
    "pressure_cv",
];

/// Number of numeric columns in a record
pub const FEATURE_DIMENSION: usize = METADATA_KEYS.len()
    + KINEMATIC_KEYS.len()
    + SPATIAL_KEYS.len()
    + TEMPORAL_KEYS.len()
    + PRESSURE_KEYS.len();

/// Fixed numeric column order: metadata, kinematic, spatial, temporal, pressure
pub fn feature_columns() -> Vec<&'static str> {
    METADATA_KEYS
        .iter()
        .chain(KINEMATIC_KEYS.iter())
        .chain(SPATIAL_KEYS.iter())
        .chain(TEMPORAL_KEYS.iter())
        .chain(PRESSURE_KEYS.iter())
        .copied()
        .collect()
}

/// A named group of features produced by one extractor.
///
/// `Default` is the group's fallback: all values zero.
pub trait FeatureGroup: Default {
    /// Keys in the same order as [`FeatureGroup::values`]
    const KEYS: &'static [&'static str];

    /// Values in key order
    fn values(&self) -> Vec<f64>;

    /// `(key, value)` pairs
    fn entries(&self) -> Vec<(&'static str, f64)> {
        Self::KEYS.iter().copied().zip(self.values()).collect()
    }
}

/// One row of the feature table, produced fresh per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub session_id: String,
    pub test_type: String,
    /// Numeric features keyed by name
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl FeatureRecord {
    /// Record with metadata and no features yet
    pub fn new(session_id: impl Into<String>, test_type: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            test_type: test_type.into(),
            values: BTreeMap::new(),
        }
    }

    /// Set a single value
    pub fn insert(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
    }

    /// Merge every key of a feature group
    pub fn extend_group<G: FeatureGroup>(&mut self, group: &G) {
        for (key, value) in group.entries() {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every column in [`feature_columns`] is present
    pub fn is_complete(&self) -> bool {
        feature_columns().iter().all(|k| self.values.contains_key(*k))
    }

    /// Values in [`feature_columns`] order; absent keys read as 0
    pub fn to_row(&self) -> Vec<f64> {
        feature_columns()
            .iter()
            .map(|k| self.get(k).unwrap_or(0.0))
            .collect()
    }
}
