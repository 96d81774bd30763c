//! Recursive Koch curve generator.
//!
//! One call produces the segments of a single snowflake edge. Each
//! recursion level replaces an edge with four sub-edges of a third of the
//! length, at angles `a`, `a+60`, `a-60`, `a`, forming the outward
//! triangular bump. Segments are emitted only at the leaves, so an edge at
//! depth `d` yields exactly `4^d` segments of length `length / 3^d`.

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::{Point2D, Rgb, Segment};

/// Maximum accepted recursion depth. Segment count grows as `4^depth`, so
/// the cap keeps a full rebuild bounded and interactive instead of relying
/// on memory exhaustion to fail first.
pub const MAX_DEPTH: u32 = 8;

/// Input for one Koch curve edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    /// Start of the base edge
    pub origin: Point2D,
    /// Length of the base edge, before subdivision
    pub length: f64,
    /// Orientation of the base edge in degrees, counter-clockwise
    pub angle_deg: f64,
    /// Number of recursive refinement passes
    pub depth: u32,
    pub stroke_width: f64,
    pub color: Rgb,
}

/// Generate the ordered leaf segments for one Koch curve edge.
///
/// Depth 0 yields the raw edge as a single segment; depth 1 yields the
/// four-segment bump. The result is deterministic for a fixed spec.
pub fn generate(spec: &CurveSpec) -> Result<Vec<Segment>, ConfigError> {
    if spec.length <= 0.0 {
        return Err(ConfigError::InvalidLength(spec.length));
    }
    if spec.depth > MAX_DEPTH {
        return Err(ConfigError::DepthTooDeep {
            depth: spec.depth,
            max: MAX_DEPTH,
        });
    }

    let mut segments = Vec::with_capacity(4usize.pow(spec.depth));
    subdivide(
        spec.origin.to_kurbo(),
        spec.length,
        spec.angle_deg,
        spec.depth,
        spec,
        &mut segments,
    );
    Ok(segments)
}

fn subdivide(
    origin: Point,
    length: f64,
    angle_deg: f64,
    depth: u32,
    spec: &CurveSpec,
    out: &mut Vec<Segment>,
) {
    // Rigid rotation of the local (unrotated) frame about the edge origin
    let rotate = Affine::rotate_about(angle_deg.to_radians(), origin);

    if depth == 0 {
        let end = rotate * Point::new(origin.x + length, origin.y);
        out.push(Segment {
            start: origin.into(),
            end: end.into(),
            color: spec.color,
            stroke_width: spec.stroke_width,
        });
        return;
    }

    let third = length / 3.0;
    // Sub-edge origins in the local frame: base start, 1/3 point, bump
    // apex, 2/3 point
    let one_third = rotate * Point::new(origin.x + third, origin.y);
    let apex = rotate
        * Point::new(
            origin.x + third * 1.5,
            origin.y + third * 3.0_f64.sqrt() / 2.0,
        );
    let two_thirds = rotate * Point::new(origin.x + third * 2.0, origin.y);

    subdivide(origin, third, angle_deg, depth - 1, spec, out);
    subdivide(one_third, third, angle_deg + 60.0, depth - 1, spec, out);
    subdivide(apex, third, angle_deg - 60.0, depth - 1, spec, out);
    subdivide(two_thirds, third, angle_deg, depth - 1, spec, out);
}
