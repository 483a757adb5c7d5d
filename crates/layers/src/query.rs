use foundation::bounds::Aabb2;
use scene::FeatureSet;
use scene::components::{Building, Poi};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ViewportQuery {
    /// Visible extent in lon/lat degrees. `None` returns everything.
    pub bbox: Option<Aabb2>,
    /// Cap applied separately to buildings and POIs.
    pub limit: usize,
}

impl Default for ViewportQuery {
    fn default() -> Self {
        Self {
            bbox: None,
            limit: 1000,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderedFeatures {
    pub buildings: Vec<Building>,
    pub pois: Vec<Poi>,
}

/// Source of the features rendered for the current map extent.
///
/// Implementations are plain data providers: no paging, retry or caching.
pub trait ViewportSource {
    fn query_rendered(&self, query: &ViewportQuery) -> RenderedFeatures;
}

fn building_in_view(building: &Building, bbox: Option<&Aabb2>) -> bool {
    let Some(bbox) = bbox else {
        return true;
    };
    // Without a single valid position the extent test is meaningless.
    building.bounds().is_some_and(|b| bbox.intersects(&b))
}

fn poi_in_view(poi: &Poi, bbox: Option<&Aabb2>) -> bool {
    let Some(bbox) = bbox else {
        return true;
    };
    poi.point().is_some_and(|p| bbox.contains(p))
}

impl ViewportSource for FeatureSet {
    fn query_rendered(&self, query: &ViewportQuery) -> RenderedFeatures {
        let bbox = query.bbox.as_ref();

        let buildings: Vec<Building> = self
            .buildings()
            .iter()
            .filter(|b| building_in_view(b, bbox))
            .take(query.limit)
            .cloned()
            .collect();
        let pois: Vec<Poi> = self
            .pois()
            .iter()
            .filter(|p| poi_in_view(p, bbox))
            .take(query.limit)
            .cloned()
            .collect();

        debug!(
            "viewport query: {} of {} buildings, {} of {} pois",
            buildings.len(),
            self.buildings().len(),
            pois.len(),
            self.pois().len()
        );

        RenderedFeatures { buildings, pois }
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewportQuery, ViewportSource};
    use foundation::bounds::Aabb2;
    use scene::FeatureSet;
    use scene::components::{Building, Poi};

    fn square(id: &str, x: f64, y: f64) -> Building {
        Building::new(
            id,
            vec![
                vec![x, y],
                vec![x, y + 1.0],
                vec![x + 1.0, y + 1.0],
                vec![x + 1.0, y],
            ],
            10.0,
        )
    }

    fn set() -> FeatureSet {
        FeatureSet::with_features(
            vec![
                square("in", 0.0, 0.0),
                square("out", 10.0, 10.0),
                Building::new("broken", vec![vec![f64::NAN, 0.5]], 3.0),
            ],
            vec![
                Poi::new("p-in", vec![0.5, 0.5], "Bar"),
                Poi::new("p-out", vec![20.0, 20.0], "Bar"),
                Poi::new("p-bad", vec![0.5], "Bar"),
            ],
        )
    }

    #[test]
    fn unbounded_query_returns_everything() {
        let got = set().query_rendered(&ViewportQuery::default());
        assert_eq!(got.buildings.len(), 3);
        assert_eq!(got.pois.len(), 3);
    }

    #[test]
    fn bbox_filters_and_drops_unlocatable_features() {
        let q = ViewportQuery {
            bbox: Some(Aabb2::new([-1.0, -1.0], [2.0, 2.0])),
            ..Default::default()
        };
        let got = set().query_rendered(&q);
        let buildings: Vec<&str> = got.buildings.iter().map(|b| b.id.as_str()).collect();
        let pois: Vec<&str> = got.pois.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(buildings, vec!["in"]);
        assert_eq!(pois, vec!["p-in"]);
    }

    #[test]
    fn limit_caps_each_kind() {
        let q = ViewportQuery {
            limit: 1,
            ..Default::default()
        };
        let got = set().query_rendered(&q);
        assert_eq!(got.buildings.len(), 1);
        assert_eq!(got.pois.len(), 1);
    }
}
