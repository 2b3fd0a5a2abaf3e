//! Extraction configuration

use serde::{Deserialize, Serialize};

/// Smallest time step used when differentiating positions (ms)
pub const DEFAULT_MIN_INTERVAL_MS: i64 = 1;

/// Immutable extraction settings, passed explicitly to every extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Lower clamp for the time step between consecutive samples (ms).
    /// Zero, negative and out-of-order deltas are raised to this value.
    pub min_interval_ms: i64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
        }
    }
}

impl FeatureConfig {
    /// Effective clamp; never below 1 ms so derivatives stay finite
    pub fn min_interval(&self) -> f64 {
        self.min_interval_ms.max(1) as f64
    }
}
