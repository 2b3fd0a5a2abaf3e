//! Session Feature Aggregation

use crate::config::FeatureConfig;
use crate::kinematic::KinematicFeatures;
use crate::pressure::PressureFeatures;
use crate::record::FeatureRecord;
use crate::spatial::SpatialFeatures;
use crate::temporal::TemporalFeatures;
use stroke_data::Session;
use tracing::debug;

/// Merges the four extractors into one record per session.
///
/// Holds only immutable configuration; sessions never influence each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureAggregator {
    config: FeatureConfig,
}

impl FeatureAggregator {
    /// Create a new aggregator
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// Extract the complete record for a session.
    ///
    /// Extractors that cannot compute from the input contribute their
    /// all-zero defaults, so every column is always present.
    pub fn extract(&self, session: &Session) -> FeatureRecord {
        let kinematic = KinematicFeatures::from_strokes(&session.strokes, &self.config);
        let spatial = SpatialFeatures::from_session(session);
        let temporal = TemporalFeatures::from_strokes(&session.strokes);
        let pressure = PressureFeatures::from_session(session);

        let degraded: Vec<&str> = [
            ("kinematic", kinematic.is_none()),
            ("spatial", spatial.is_none()),
            ("temporal", temporal.is_none()),
            ("pressure", pressure.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect();

        if !degraded.is_empty() {
            debug!(
                session_id = %session.id,
                "Using default features for: {}",
                degraded.join(", ")
            );
        }

        let mut record = FeatureRecord::new(session.id.clone(), session.test_type.clone());
        record.insert("created_at", session.created_at as f64);
        record.insert("stroke_count", session.strokes.len() as f64);
        record.insert("total_points", session.point_count() as f64);
        record.extend_group(&kinematic.unwrap_or_default());
        record.extend_group(&spatial.unwrap_or_default());
        record.extend_group(&temporal.unwrap_or_default());
        record.extend_group(&pressure.unwrap_or_default());

        record
    }

    /// Extract records for a batch of sessions, in input order
    pub fn extract_batch(&self, sessions: &[Session]) -> Vec<FeatureRecord> {
        debug!("Extracting features for {} sessions", sessions.len());
        sessions.iter().map(|s| self.extract(s)).collect()
    }
}
