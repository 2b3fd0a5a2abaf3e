//! Handwriting Feature Engine
//!
//! Turns pen-stroke sessions into fixed-width feature records for
//! classifier training. Four independent extractors (kinematic, spatial,
//! temporal, pressure) are merged by [`FeatureAggregator`]; every extractor
//! is total over well-formed sessions and falls back to zeros on
//! degenerate input.

mod config;
mod features;
mod geometry;
mod kinematic;
mod pressure;
mod record;
mod spatial;
mod statistics;
mod temporal;

pub use config::FeatureConfig;
pub use features::FeatureAggregator;
pub use geometry::{distance, safe_div, BoundingBox};
pub use kinematic::KinematicFeatures;
pub use pressure::PressureFeatures;
pub use record::{
    feature_columns, FeatureGroup, FeatureRecord, FEATURE_DIMENSION, KINEMATIC_KEYS,
    METADATA_KEYS, PRESSURE_KEYS, SPATIAL_KEYS, TEMPORAL_KEYS,
};
pub use spatial::SpatialFeatures;
pub use statistics::Statistics;
pub use temporal::TemporalFeatures;
