use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(pub String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Extruded building footprints, colored from feature state.
    Buildings,
    /// POI circles, colored by category palette.
    Pois,
    /// POI density heat map.
    PoiHeat,
}

pub trait Layer {
    fn id(&self) -> &LayerId;
    fn kind(&self) -> LayerKind;
}

fn default_visible() -> bool {
    true
}

fn default_max_zoom() -> f64 {
    22.0
}

/// Declarative layer entry of a map configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub id: LayerId,
    pub kind: LayerKind,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub min_zoom: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
}

impl LayerSpec {
    pub fn new(id: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: LayerId::new(id),
            kind,
            visible: default_visible(),
            min_zoom: 0.0,
            max_zoom: default_max_zoom(),
        }
    }

    pub fn with_zoom_range(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn visible_at(&self, zoom: f64) -> bool {
        self.visible && zoom >= self.min_zoom && zoom <= self.max_zoom
    }
}

impl Layer for LayerSpec {
    fn id(&self) -> &LayerId {
        &self.id
    }

    fn kind(&self) -> LayerKind {
        self.kind
    }
}

/// The building, POI and heat layers every map view starts with.
pub fn default_layers() -> Vec<LayerSpec> {
    vec![
        LayerSpec::new("3d-buildings", LayerKind::Buildings).with_zoom_range(12.0, 22.0),
        LayerSpec::new("miami-pois", LayerKind::Pois),
        LayerSpec::new("poi-heat", LayerKind::PoiHeat),
    ]
}

#[cfg(test)]
mod tests {
    use super::{Layer, LayerKind, LayerSpec, default_layers};

    #[test]
    fn visibility_respects_zoom_range_and_flag() {
        let mut spec = LayerSpec::new("b", LayerKind::Buildings).with_zoom_range(15.0, 22.0);
        assert!(!spec.visible_at(14.9));
        assert!(spec.visible_at(15.0));
        spec.visible = false;
        assert!(!spec.visible_at(16.0));
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let spec: LayerSpec =
            serde_json::from_str(r#"{"id":"poi-heat","kind":"poi_heat"}"#).unwrap();
        assert_eq!(spec.kind(), LayerKind::PoiHeat);
        assert!(spec.visible);
        assert_eq!(spec.min_zoom, 0.0);
        assert_eq!(spec.max_zoom, 22.0);
    }

    #[test]
    fn default_layer_set_has_one_of_each_kind() {
        let kinds: Vec<LayerKind> = default_layers().iter().map(|l| l.kind()).collect();
        assert_eq!(
            kinds,
            vec![LayerKind::Buildings, LayerKind::Pois, LayerKind::PoiHeat]
        );
    }
}
