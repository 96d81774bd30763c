//! Shared geometry value types.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// 2D point in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to kurbo Point for affine math
    pub fn to_kurbo(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for Point2D {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// RGB color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
}

/// A renderable line segment, produced only by the curve generator.
/// Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
    pub color: Rgb,
    pub stroke_width: f64,
}

impl Segment {
    /// Euclidean length of the segment
    pub fn length(&self) -> f64 {
        (self.end.to_kurbo() - self.start.to_kurbo()).hypot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_length() {
        let seg = Segment {
            start: Point2D::new(0.0, 0.0),
            end: Point2D::new(3.0, 4.0),
            color: Rgb::WHITE,
            stroke_width: 1.0,
        };
        assert!((seg.length() - 5.0).abs() < 1e-12);
    }
}
