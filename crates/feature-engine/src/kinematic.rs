//! Kinematic Features
//!
//! Velocity, acceleration and jerk estimated by finite differences over
//! irregular timestamps. Samples are pooled across every stroke of a
//! session before statistics are taken; differences never cross a stroke
//! boundary.
//!
//! Each derived sample keeps the time step of the most recent point
//! interval it spans, and the next derivative divides by that step. For a
//! stroke with points `p0..pn`, velocity `v[i]` covers `p[i]..p[i+1]`,
//! acceleration `a[i] = (v[i] - v[i-1]) / dt(v[i])` and jerk
//! `j[i] = (a[i] - a[i-1]) / dt(a[i])`.

use crate::config::FeatureConfig;
use crate::geometry::distance;
use crate::record::{FeatureGroup, KINEMATIC_KEYS};
use crate::statistics::Statistics;
use stroke_data::Stroke;

/// Derived sample with the time step it was measured over
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    value: f64,
    dt: f64,
}

/// First difference of a sample series, each divided by the later sample's step
fn differentiate(samples: &[Sample]) -> Vec<Sample> {
    samples
        .windows(2)
        .map(|w| Sample {
            value: (w[1].value - w[0].value) / w[1].dt,
            dt: w[1].dt,
        })
        .collect()
}

#[derive(Debug, Default)]
struct Pools {
    velocities: Vec<f64>,
    accelerations: Vec<f64>,
    jerks: Vec<f64>,
    path_lengths: Vec<f64>,
}

impl Pools {
    fn add_stroke(&mut self, stroke: &Stroke, min_interval: f64) {
        if stroke.points.len() < 2 {
            return;
        }

        let velocity: Vec<Sample> = stroke
            .points
            .windows(2)
            .map(|w| {
                let (p0, p1) = (&w[0], &w[1]);
                let dt = (p1.timestamp.saturating_sub(p0.timestamp) as f64).max(min_interval);
                let dist = distance((p0.x, p0.y), (p1.x, p1.y));
                self.path_lengths.push(dist);
                Sample {
                    value: dist / dt,
                    dt,
                }
            })
            .collect();
        let acceleration = differentiate(&velocity);
        let jerk = differentiate(&acceleration);

        self.velocities.extend(velocity.iter().map(|s| s.value));
        self.accelerations.extend(acceleration.iter().map(|s| s.value));
        self.jerks.extend(jerk.iter().map(|s| s.value));
    }
}

/// Velocity, acceleration, jerk and path-length statistics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KinematicFeatures {
    pub velocity_mean: f64,
    pub velocity_std: f64,
    pub velocity_max: f64,
    pub acceleration_mean: f64,
    pub acceleration_std: f64,
    pub jerk_mean: f64,
    pub jerk_std: f64,
    pub path_length_total: f64,
    pub path_length_mean: f64,
}

impl KinematicFeatures {
    /// Compute from a session's strokes.
    ///
    /// `None` when no stroke has two or more points.
    pub fn from_strokes(strokes: &[Stroke], config: &FeatureConfig) -> Option<Self> {
        let min_interval = config.min_interval();
        let mut pools = Pools::default();
        for stroke in strokes {
            pools.add_stroke(stroke, min_interval);
        }

        if pools.velocities.is_empty() {
            return None;
        }

        let velocity = Statistics::compute(&pools.velocities);
        let acceleration = Statistics::compute(&pools.accelerations);
        let jerk = Statistics::compute(&pools.jerks);
        let path = Statistics::compute(&pools.path_lengths);

        Some(Self {
            velocity_mean: velocity.mean,
            velocity_std: velocity.std_dev,
            velocity_max: velocity.max,
            acceleration_mean: acceleration.mean,
            acceleration_std: acceleration.std_dev,
            jerk_mean: jerk.mean,
            jerk_std: jerk.std_dev,
            path_length_total: path.sum,
            path_length_mean: path.mean,
        })
    }
}

impl FeatureGroup for KinematicFeatures {
    const KEYS: &'static [&'static str] = &KINEMATIC_KEYS;

    fn values(&self) -> Vec<f64> {
        vec![
            self.velocity_mean,
            self.velocity_std,
            self.velocity_max,
            self.acceleration_mean,
            self.acceleration_std,
            self.jerk_mean,
            self.jerk_std,
            self.path_length_total,
            self.path_length_mean,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stroke_data::Point;

    fn stroke(points: &[(f64, f64, i64)]) -> Stroke {
        let points: Vec<Point> = points.iter().map(|&(x, y, t)| Point::new(x, y, t)).collect();
        let start = points.first().map(|p| p.timestamp).unwrap_or(0);
        let end = points.last().map(|p| p.timestamp).unwrap_or(0);
        Stroke::new(points, start, end)
    }

    #[test]
    fn test_constant_speed_line() {
        let strokes = vec![stroke(&[(0.0, 0.0, 0), (3.0, 4.0, 100), (6.0, 8.0, 200)])];
        let features = KinematicFeatures::from_strokes(&strokes, &FeatureConfig::default()).unwrap();
        assert_eq!(features.velocity_mean, 0.05);
        assert_eq!(features.velocity_std, 0.0);
        assert_eq!(features.velocity_max, 0.05);
        assert_eq!(features.acceleration_mean, 0.0);
        assert_eq!(features.jerk_mean, 0.0);
        assert_eq!(features.path_length_total, 10.0);
        assert_eq!(features.path_length_mean, 5.0);
    }

    #[test]
    fn test_identical_timestamps_clamp_to_one_ms() {
        let strokes = vec![stroke(&[(0.0, 0.0, 50), (3.0, 4.0, 50)])];
        let features = KinematicFeatures::from_strokes(&strokes, &FeatureConfig::default()).unwrap();
        assert_eq!(features.velocity_mean, 5.0);
        assert!(features.velocity_max.is_finite());
    }

    #[test]
    fn test_backwards_timestamps_clamp() {
        let strokes = vec![stroke(&[(0.0, 0.0, 100), (0.0, 2.0, 40)])];
        let features = KinematicFeatures::from_strokes(&strokes, &FeatureConfig::default()).unwrap();
        assert_eq!(features.velocity_mean, 2.0);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let strokes = vec![
            stroke(&[(0.0, 0.0, -9_000_000_000_000_000_000), (3.0, 4.0, 9_000_000_000_000_000_000)]),
            stroke(&[(0.0, 0.0, i64::MAX), (3.0, 4.0, i64::MIN), (6.0, 8.0, i64::MAX)]),
        ];
        let features = KinematicFeatures::from_strokes(&strokes, &FeatureConfig::default()).unwrap();
        assert!(features.values().iter().all(|v| v.is_finite()));
        // i64::MIN - i64::MAX saturates negative and clamps to 1 ms
        assert_eq!(features.velocity_max, 5.0);
        assert_eq!(features.path_length_total, 15.0);
    }

    #[test]
    fn test_configured_interval_clamp() {
        let strokes = vec![stroke(&[(0.0, 0.0, 0), (10.0, 0.0, 2)])];
        let config = FeatureConfig { min_interval_ms: 5 };
        let features = KinematicFeatures::from_strokes(&strokes, &config).unwrap();
        assert_eq!(features.velocity_mean, 2.0);
    }

    #[test]
    fn test_acceleration_uses_later_interval() {
        // v = [1/10, 4/20], a = (0.2 - 0.1) / 20
        let strokes = vec![stroke(&[(0.0, 0.0, 0), (1.0, 0.0, 10), (5.0, 0.0, 30)])];
        let features = KinematicFeatures::from_strokes(&strokes, &FeatureConfig::default()).unwrap();
        assert!((features.acceleration_mean - 0.005).abs() < 1e-12);
        assert_eq!(features.acceleration_std, 0.0);
        assert_eq!(features.jerk_mean, 0.0);
    }

    #[test]
    fn test_jerk_needs_four_points() {
        // v = [1, 2, 4] per 1 ms; a = [1, 2]; j = [1]
        let strokes = vec![stroke(&[(0.0, 0.0, 0), (1.0, 0.0, 1), (3.0, 0.0, 2), (7.0, 0.0, 3)])];
        let features = KinematicFeatures::from_strokes(&strokes, &FeatureConfig::default()).unwrap();
        assert_eq!(features.acceleration_mean, 1.5);
        assert_eq!(features.acceleration_std, 0.5);
        assert_eq!(features.jerk_mean, 1.0);
        assert_eq!(features.jerk_std, 0.0);
    }

    #[test]
    fn test_samples_pool_across_strokes() {
        let strokes = vec![
            stroke(&[(0.0, 0.0, 0), (10.0, 0.0, 10)]),
            stroke(&[(0.0, 0.0, 100), (30.0, 0.0, 110)]),
        ];
        let features = KinematicFeatures::from_strokes(&strokes, &FeatureConfig::default()).unwrap();
        assert_eq!(features.velocity_mean, 2.0);
        assert_eq!(features.velocity_std, 1.0);
        assert_eq!(features.velocity_max, 3.0);
        // No acceleration across the stroke boundary
        assert_eq!(features.acceleration_mean, 0.0);
        assert_eq!(features.path_length_total, 40.0);
        assert_eq!(features.path_length_mean, 20.0);
    }

    #[test]
    fn test_single_point_strokes_yield_nothing() {
        let strokes = vec![stroke(&[(5.0, 5.0, 0)]), stroke(&[])];
        assert!(KinematicFeatures::from_strokes(&strokes, &FeatureConfig::default()).is_none());
        assert!(KinematicFeatures::from_strokes(&[], &FeatureConfig::default()).is_none());
    }

    #[test]
    fn test_default_is_all_zero() {
        let defaults = KinematicFeatures::default();
        assert_eq!(defaults.entries().len(), KINEMATIC_KEYS.len());
        assert!(defaults.values().iter().all(|v| *v == 0.0));
    }
}
