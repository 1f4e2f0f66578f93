//! Five-point subdivision of a hexagon edge.

use super::metrics;
use crate::core::Vec3;

/// Five colinear points splitting an edge into four segments.
///
/// The middle point `v3` is where a river channel cuts through the edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeVertices {
    pub v1: Vec3,
    pub v2: Vec3,
    pub v3: Vec3,
    pub v4: Vec3,
    pub v5: Vec3,
}

impl EdgeVertices {
    /// Split the edge into quarters.
    pub fn new(corner1: Vec3, corner2: Vec3) -> Self {
        Self::with_outer_step(corner1, corner2, 0.25)
    }

    /// Split with an explicit step for `v2`/`v4`.
    ///
    /// Channel edges use a smaller step (e.g. 1/6) so the channel walls do not
    /// pinch toward the middle point.
    pub fn with_outer_step(corner1: Vec3, corner2: Vec3, outer_step: f32) -> Self {
        Self {
            v1: corner1,
            v2: corner1.lerp(corner2, outer_step),
            v3: corner1.lerp(corner2, 0.5),
            v4: corner1.lerp(corner2, 1.0 - outer_step),
            v5: corner2,
        }
    }

    /// Intermediate edge `step` terrace steps from `a` toward `b`.
    pub fn terrace_lerp(a: &EdgeVertices, b: &EdgeVertices, step: i32) -> Self {
        Self {
            v1: metrics::terrace_lerp(a.v1, b.v1, step),
            v2: metrics::terrace_lerp(a.v2, b.v2, step),
            v3: metrics::terrace_lerp(a.v3, b.v3, step),
            v4: metrics::terrace_lerp(a.v4, b.v4, step),
            v5: metrics::terrace_lerp(a.v5, b.v5, step),
        }
    }

    pub fn points(&self) -> [Vec3; 5] {
        [self.v1, self.v2, self.v3, self.v4, self.v5]
    }

    /// Copy of this edge with every point moved to height `y`.
    pub fn with_y(&self, y: f32) -> Self {
        let set = |mut v: Vec3| {
            v.y = y;
            v
        };
        Self {
            v1: set(self.v1),
            v2: set(self.v2),
            v3: set(self.v3),
            v4: set(self.v4),
            v5: set(self.v5),
        }
    }
}
