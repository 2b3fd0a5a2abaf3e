//! Pressure Features

use crate::record::{FeatureGroup, PRESSURE_KEYS};
use crate::statistics::Statistics;
use stroke_data::Session;

/// Pen pressure distribution over every pressure-bearing point
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressureFeatures {
    pub pressure_mean: f64,
    pub pressure_std: f64,
    pub pressure_min: f64,
    pub pressure_max: f64,
    pub pressure_range: f64,
    /// Coefficient of variation (std / mean)
    pub pressure_cv: f64,
}

impl PressureFeatures {
    /// Compute from the session's points; points without pressure are skipped.
    ///
    /// `None` when no point carries a pressure reading.
    pub fn from_session(session: &Session) -> Option<Self> {
        let pressures: Vec<f64> = session.points().filter_map(|p| p.pressure).collect();
        if pressures.is_empty() {
            return None;
        }

        let stats = Statistics::compute(&pressures);
        Some(Self {
            pressure_mean: stats.mean,
            pressure_std: stats.std_dev,
            pressure_min: stats.min,
            pressure_max: stats.max,
            pressure_range: stats.range(),
            pressure_cv: stats.coefficient_of_variation(),
        })
    }
}

impl FeatureGroup for PressureFeatures {
    const KEYS: &'static [&'static str] = &PRESSURE_KEYS;

    fn values(&self) -> Vec<f64> {
        vec![
            self.pressure_mean,
            self.pressure_std,
            self.pressure_min,
            self.pressure_max,
            self.pressure_range,
            self.pressure_cv,
        ]
    }
}
