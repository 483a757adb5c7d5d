use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Axis-aligned bounding box in map units (lon/lat degrees).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Aabb2 {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Aabb2 { min, max }
    }

    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = points.first()?;
        let mut min = [first.x, first.y];
        let mut max = [first.x, first.y];
        for p in points.iter().skip(1) {
            min[0] = min[0].min(p.x);
            min[1] = min[1].min(p.y);
            max[0] = max[0].max(p.x);
            max[1] = max[1].max(p.y);
        }
        Some(Aabb2::new(min, max))
    }

    /// Inclusive on all edges.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min[0] && p.x <= self.max[0] && p.y >= self.min[1] && p.y <= self.max[1]
    }

    /// Inclusive overlap test; a box with a NaN edge overlaps nothing.
    pub fn intersects(&self, other: &Aabb2) -> bool {
        other.min[0] <= self.max[0]
            && other.max[0] >= self.min[0]
            && other.min[1] <= self.max[1]
            && other.max[1] >= self.min[1]
    }
}
