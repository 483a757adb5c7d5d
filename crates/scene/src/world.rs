use crate::components::{Building, Poi};

/// Buildings and POIs currently materialized from the map.
///
/// Contents are transient and viewport scoped; a new set is built whenever
/// the camera settles.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeatureSet {
    buildings: Vec<Building>,
    pois: Vec<Poi>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_features(buildings: Vec<Building>, pois: Vec<Poi>) -> Self {
        Self { buildings, pois }
    }

    pub fn add_building(&mut self, building: Building) {
        self.buildings.push(building);
    }

    pub fn add_poi(&mut self, poi: Poi) {
        self.pois.push(poi);
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty() && self.pois.is_empty()
    }
}
