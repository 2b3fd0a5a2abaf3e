//! Spatial Features

use crate::geometry::{distance, safe_div, BoundingBox};
use crate::record::{FeatureGroup, SPATIAL_KEYS};
use stroke_data::Session;

/// Extent and placement of the drawing on the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpatialFeatures {
    pub bounding_box_width: f64,
    pub bounding_box_height: f64,
    pub bounding_box_area: f64,
    /// Bounding box area as a fraction of the canvas
    pub canvas_coverage: f64,
    /// |center of mass - canvas center| along x
    pub center_offset_x: f64,
    pub center_offset_y: f64,
    pub center_offset_total: f64,
}

impl SpatialFeatures {
    /// Compute from every point of the session.
    ///
    /// `None` when the session has no points or no canvas size.
    pub fn from_session(session: &Session) -> Option<Self> {
        let canvas = session.canvas_size?;
        let bbox = BoundingBox::enclosing(session.points().map(|p| (p.x, p.y)))?;

        let n = session.point_count() as f64;
        let (sum_x, sum_y) = session
            .points()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let center_of_mass = (safe_div(sum_x, n), safe_div(sum_y, n));
        let canvas_center = canvas.center();

        let area = bbox.area();
        Some(Self {
            bounding_box_width: bbox.width(),
            bounding_box_height: bbox.height(),
            bounding_box_area: area,
            canvas_coverage: area / canvas.area_or_unit(),
            center_offset_x: (center_of_mass.0 - canvas_center.0).abs(),
            center_offset_y: (center_of_mass.1 - canvas_center.1).abs(),
            center_offset_total: distance(center_of_mass, canvas_center),
        })
    }
}

impl FeatureGroup for SpatialFeatures {
    const KEYS: &'static [&'static str] = &SPATIAL_KEYS;

    fn values(&self) -> Vec<f64> {
        vec![
            self.bounding_box_width,
            self.bounding_box_height,
            self.bounding_box_area,
            self.canvas_coverage,
            self.center_offset_x,
            self.center_offset_y,
            self.center_offset_total,
        ]
    }
}
