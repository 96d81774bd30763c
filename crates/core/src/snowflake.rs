//! Snowflake assembler: one Koch curve per edge of a regular polygon.

use std::f64::consts::PI;

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

use crate::curve::{generate, CurveSpec, MAX_DEPTH};
use crate::error::ConfigError;
use crate::geometry::{Point2D, Rgb, Segment};

/// Minimum polygon face count; anything smaller is degenerate.
pub const MIN_FACES: u32 = 3;

/// Full description of a snowflake; the assembler regenerates wholesale
/// from this on every change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnowflakeSpec {
    pub center: Point2D,
    /// Circumradius of the base polygon
    pub radius: f64,
    pub face_count: u32,
    pub depth: u32,
    pub stroke_width: f64,
    pub color: Rgb,
}

impl Default for SnowflakeSpec {
    fn default() -> Self {
        Self {
            center: Point2D::new(0.0, 0.0),
            radius: 320.0,
            face_count: 4,
            depth: 4,
            stroke_width: 1.0,
            color: Rgb::WHITE,
        }
    }
}

impl SnowflakeSpec {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.face_count < MIN_FACES {
            return Err(ConfigError::InvalidFaceCount(self.face_count));
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::DepthTooDeep {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }
}

/// Owns the spec and the generated segment list. The renderer reads
/// segments through the accessor; it never holds the collection itself.
#[derive(Debug, Clone)]
pub struct Snowflake {
    spec: SnowflakeSpec,
    segments: Vec<Segment>,
}

impl Snowflake {
    /// Validate the spec and generate the full segment list.
    pub fn build(spec: SnowflakeSpec) -> Result<Self, ConfigError> {
        let segments = generate_segments(&spec)?;
        Ok(Self { spec, segments })
    }

    pub fn spec(&self) -> &SnowflakeSpec {
        &self.spec
    }

    /// Generated segments, edge index outer and recursion order inner.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Change the recursion depth and rebuild.
    pub fn set_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        let mut next = self.spec;
        next.depth = depth;
        self.set_spec(next)
    }

    /// Change the polygon face count and rebuild.
    pub fn set_face_count(&mut self, face_count: u32) -> Result<(), ConfigError> {
        let mut next = self.spec;
        next.face_count = face_count;
        self.set_spec(next)
    }

    /// Replace the whole spec and rebuild. The new segment list is built
    /// to completion before it replaces the old one, so a failed rebuild
    /// leaves both the spec and the previous segments untouched.
    pub fn set_spec(&mut self, spec: SnowflakeSpec) -> Result<(), ConfigError> {
        let segments = generate_segments(&spec)?;
        self.spec = spec;
        self.segments = segments;
        Ok(())
    }
}

/// Walk the regular polygon's perimeter, generating one Koch curve per edge.
fn generate_segments(spec: &SnowflakeSpec) -> Result<Vec<Segment>, ConfigError> {
    spec.validate()?;

    let n = spec.face_count as f64;
    let edge_len = 2.0 * spec.radius * (PI / n).sin();
    let apothem = spec.radius * (PI / n).cos();
    // Turning by the reflex exterior angle at each vertex; closes because
    // rotations are mod 360
    let turn_deg = 360.0 - 360.0 / n;

    // First edge starts at the left end of the top edge, heading +x
    let mut start = Point::new(
        spec.center.x - edge_len / 2.0,
        spec.center.y + apothem,
    );

    let mut segments =
        Vec::with_capacity(spec.face_count as usize * 4usize.pow(spec.depth));
    for i in 0..spec.face_count {
        let angle_deg = turn_deg * i as f64;
        let curve = generate(&CurveSpec {
            origin: start.into(),
            length: edge_len,
            angle_deg,
            depth: spec.depth,
            stroke_width: spec.stroke_width,
            color: spec.color,
        })?;
        segments.extend(curve);

        // Next edge starts where this one ends: (edge_len, 0) rotated
        // about the current start
        start = Affine::rotate_about(angle_deg.to_radians(), start)
            * Point::new(start.x + edge_len, start.y);
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn spec(face_count: u32, depth: u32) -> SnowflakeSpec {
        SnowflakeSpec {
            center: Point2D::new(0.0, 0.0),
            radius: 100.0,
            face_count,
            depth,
            stroke_width: 1.0,
            color: Rgb::WHITE,
        }
    }

    #[test]
    fn test_depth_zero_is_raw_polygon() {
        let flake = Snowflake::build(spec(6, 0)).unwrap();
        assert_eq!(flake.segments().len(), 6);

        let edge_len = 2.0 * 100.0 * (PI / 6.0).sin();
        for seg in flake.segments() {
            assert!((seg.length() - edge_len).abs() < EPS);
        }
        // Every vertex lies on the circumcircle
        for seg in flake.segments() {
            let r = (seg.start.x * seg.start.x + seg.start.y * seg.start.y).sqrt();
            assert!((r - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_segment_count_per_edge() {
        let flake = Snowflake::build(spec(4, 1)).unwrap();
        // 4 segments per edge at depth 1, 4 edges
        assert_eq!(flake.segments().len(), 16);

        let flake = Snowflake::build(spec(3, 3)).unwrap();
        assert_eq!(flake.segments().len(), 3 * 4usize.pow(3));
    }

    #[test]
    fn test_curve_closes() {
        for (faces, depth) in [(3, 0), (4, 1), (5, 2), (6, 3)] {
            let flake = Snowflake::build(spec(faces, depth)).unwrap();
            let segments = flake.segments();
            for pair in segments.windows(2) {
                assert!((pair[0].end.x - pair[1].start.x).abs() < 1e-6);
                assert!((pair[0].end.y - pair[1].start.y).abs() < 1e-6);
            }
            let first = segments.first().unwrap();
            let last = segments.last().unwrap();
            assert!((last.end.x - first.start.x).abs() < 1e-6);
            assert!((last.end.y - first.start.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_first_edge_placement() {
        let flake = Snowflake::build(spec(4, 0)).unwrap();
        let edge_len = 2.0 * 100.0 * (PI / 4.0).sin();
        let apothem = 100.0 * (PI / 4.0).cos();
        let first = &flake.segments()[0];
        assert!((first.start.x - (-edge_len / 2.0)).abs() < EPS);
        assert!((first.start.y - apothem).abs() < EPS);
        assert!((first.end.x - edge_len / 2.0).abs() < EPS);
        assert!((first.end.y - apothem).abs() < EPS);
    }

    #[test]
    fn test_setters_match_fresh_build() {
        let mut flake = Snowflake::build(spec(3, 1)).unwrap();
        flake.set_depth(2).unwrap();
        flake.set_face_count(5).unwrap();

        let fresh = Snowflake::build(spec(5, 2)).unwrap();
        assert_eq!(flake.spec(), fresh.spec());
        assert_eq!(flake.segments(), fresh.segments());
    }

    #[test]
    fn test_rejects_degenerate_polygon() {
        assert_eq!(
            Snowflake::build(spec(2, 1)).err(),
            Some(ConfigError::InvalidFaceCount(2))
        );
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut bad = spec(4, 1);
        bad.radius = 0.0;
        assert_eq!(
            Snowflake::build(bad).err(),
            Some(ConfigError::InvalidRadius(0.0))
        );
    }

    #[test]
    fn test_failed_mutation_keeps_prior_state() {
        let mut flake = Snowflake::build(spec(4, 2)).unwrap();
        let before_spec = *flake.spec();
        let before_segments = flake.segments().to_vec();

        assert!(flake.set_face_count(2).is_err());
        assert!(flake.set_depth(MAX_DEPTH + 1).is_err());

        assert_eq!(flake.spec(), &before_spec);
        assert_eq!(flake.segments(), &before_segments[..]);
    }
}
