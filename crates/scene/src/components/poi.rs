use foundation::ids::FeatureId;
use foundation::math::Vec2;
use serde::{Deserialize, Serialize};

use super::Position;

/// Categorized point feature from the rendered POI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: FeatureId,
    pub position: Position,
    /// Display category as tagged by the data source, e.g. `"Fast Food"`.
    pub category: String,
}

impl Poi {
    pub fn new(id: impl Into<FeatureId>, position: Position, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position,
            category: category.into(),
        }
    }

    pub fn point(&self) -> Option<Vec2> {
        Vec2::from_position(&self.position)
    }
}
