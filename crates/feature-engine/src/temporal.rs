//! Temporal Features

use crate::record::{FeatureGroup, TEMPORAL_KEYS};
use crate::statistics::Statistics;
use stroke_data::Stroke;

/// Stroke duration and inter-stroke pause statistics (ms)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemporalFeatures {
    pub stroke_duration_mean: f64,
    pub stroke_duration_std: f64,
    pub stroke_duration_max: f64,
    pub inter_stroke_pause_mean: f64,
    pub inter_stroke_pause_std: f64,
    pub inter_stroke_pause_max: f64,
    pub total_pause_time: f64,
    /// Sum of all stroke durations
    pub total_drawing_time: f64,
}

/// Gap between consecutive strokes, clamped at zero for overlaps.
/// Pairs missing either bound are skipped.
fn pauses(strokes: &[Stroke]) -> Vec<f64> {
    strokes
        .windows(2)
        .filter_map(|w| match (w[0].end_time, w[1].start_time) {
            (Some(end), Some(start)) => Some(start.saturating_sub(end).max(0) as f64),
            _ => None,
        })
        .collect()
}

impl TemporalFeatures {
    /// Compute from a session's strokes.
    ///
    /// `None` when no stroke carries timing information.
    pub fn from_strokes(strokes: &[Stroke]) -> Option<Self> {
        let durations: Vec<f64> = strokes
            .iter()
            .filter_map(Stroke::duration)
            .map(|d| d as f64)
            .collect();
        let pauses = pauses(strokes);

        if durations.is_empty() && pauses.is_empty() {
            return None;
        }

        let duration = Statistics::compute(&durations);
        let pause = Statistics::compute(&pauses);

        Some(Self {
            stroke_duration_mean: duration.mean,
            stroke_duration_std: duration.std_dev,
            stroke_duration_max: duration.max,
            inter_stroke_pause_mean: pause.mean,
            inter_stroke_pause_std: pause.std_dev,
            inter_stroke_pause_max: pause.max,
            total_pause_time: pause.sum,
            total_drawing_time: duration.sum,
        })
    }
}

impl FeatureGroup for TemporalFeatures {
    const KEYS: &'static [&'static str] = &TEMPORAL_KEYS;

    fn values(&self) -> Vec<f64> {
        vec![
            self.stroke_duration_mean,
            self.stroke_duration_std,
            self.stroke_duration_max,
            self.inter_stroke_pause_mean,
            self.inter_stroke_pause_std,
            self.inter_stroke_pause_max,
            self.total_pause_time,
            self.total_drawing_time,
        ]
    }
}
