//! Geometry Helpers

/// Euclidean distance between two points
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// `numerator / denominator`, or 0 when the denominator is zero
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Smallest box containing every point, `None` for no points
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points.into_iter().fold(None, |bbox, (x, y)| {
            Some(match bbox {
                None => Self {
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                },
                Some(b) => Self {
                    min_x: b.min_x.min(x),
                    min_y: b.min_y.min(y),
                    max_x: b.max_x.max(x),
                    max_y: b.max_y.max(y),
                },
            })
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_3_4_5() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(distance((3.0, 4.0), (0.0, 0.0)), 5.0);
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(10.0, 4.0), 2.5);
        assert_eq!(safe_div(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_bounding_box() {
        let bbox = BoundingBox::enclosing(vec![(1.0, 5.0), (4.0, -1.0), (2.0, 2.0)]).unwrap();
        assert_eq!(bbox.width(), 3.0);
        assert_eq!(bbox.height(), 6.0);
        assert_eq!(bbox.area(), 18.0);
    }

    #[test]
    fn test_bounding_box_empty() {
        assert!(BoundingBox::enclosing(Vec::new()).is_none());
    }
}
