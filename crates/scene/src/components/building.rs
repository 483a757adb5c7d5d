use foundation::bounds::Aabb2;
use foundation::ids::FeatureId;
use foundation::math::Vec2;
use serde::{Deserialize, Serialize};

use super::Position;

/// Extruded building footprint from the rendered building layer.
///
/// The ring is implicitly closed: the last position connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: FeatureId,
    pub ring: Vec<Position>,
    #[serde(default)]
    pub height: f64,
}

impl Building {
    pub fn new(id: impl Into<FeatureId>, ring: Vec<Position>, height: f64) -> Self {
        Self {
            id: id.into(),
            ring,
            height,
        }
    }

    /// Ring positions with exactly two finite components, in ring order.
    pub fn valid_points(&self) -> Vec<Vec2> {
        self.ring
            .iter()
            .filter_map(|p| Vec2::from_position(p))
            .collect()
    }

    pub fn bounds(&self) -> Option<Aabb2> {
        Aabb2::from_points(&self.valid_points())
    }
}
