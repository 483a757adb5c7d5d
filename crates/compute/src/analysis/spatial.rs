use foundation::math::Vec2;
use scene::components::Position;

pub struct SpatialAnalysis;

impl SpatialAnalysis {
    /// Mean of the ring's valid positions.
    ///
    /// A position is valid when it has exactly two finite components; the rest
    /// are dropped before averaging. Returns `None` if nothing valid remains.
    pub fn ring_centroid(ring: &[Position]) -> Option<Vec2> {
        let mut sx = 0.0;
        let mut sy = 0.0;
        let mut n = 0usize;
        for p in ring.iter().filter_map(|p| Vec2::from_position(p)) {
            sx += p.x;
            sy += p.y;
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let c = Vec2::new(sx / n as f64, sy / n as f64);
        (c.x.is_finite() && c.y.is_finite()).then_some(c)
    }

    /// Euclidean distance in the map's native units (degrees), not meters.
    pub fn planar_distance(a: Vec2, b: Vec2) -> f64 {
        (a - b).length()
    }
}
