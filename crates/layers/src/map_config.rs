use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layer::{LayerId, LayerSpec, default_layers};
use crate::palette::PoiPalette;
use crate::symbology::HighlightPaint;

pub const DEFAULT_STYLE_URL: &str = "mapbox://styles/mapbox/dark-v11";
pub const MAX_PITCH_DEG: f64 = 85.0;
pub const MAX_ZOOM_LEVEL: f64 = 24.0;

/// Everything a map view needs at initialization.
///
/// One parameterized config replaces per-view initializer variants; build it
/// with [`MapConfig::builder`] or load it from JSON and call
/// [`MapConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub style_url: String,
    /// `[lon, lat]` in degrees.
    pub center: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub pitch: f64,
    pub layers: Vec<LayerSpec>,
    pub poi_palette: PoiPalette,
    pub highlight_paint: HighlightPaint,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style_url: DEFAULT_STYLE_URL.to_string(),
            center: [-95.5577, 29.7837],
            zoom: 7.5,
            min_zoom: 6.5,
            max_zoom: 17.0,
            pitch: 0.0,
            layers: default_layers(),
            poi_palette: PoiPalette::default(),
            highlight_paint: HighlightPaint::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapConfigError {
    EmptyStyleUrl,
    InvalidCenter { lon: f64, lat: f64 },
    InvalidZoomRange { min: f64, zoom: f64, max: f64 },
    InvalidPitch(f64),
    DuplicateLayer(LayerId),
}

impl fmt::Display for MapConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapConfigError::EmptyStyleUrl => write!(f, "style url is empty"),
            MapConfigError::InvalidCenter { lon, lat } => {
                write!(f, "center out of range: lon={lon} lat={lat}")
            }
            MapConfigError::InvalidZoomRange { min, zoom, max } => {
                write!(f, "zoom {zoom} not within [{min}, {max}]")
            }
            MapConfigError::InvalidPitch(p) => {
                write!(f, "pitch {p} not within [0, {MAX_PITCH_DEG}]")
            }
            MapConfigError::DuplicateLayer(id) => write!(f, "duplicate layer id: {id}"),
        }
    }
}

impl std::error::Error for MapConfigError {}

impl MapConfig {
    pub fn builder() -> MapConfigBuilder {
        MapConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), MapConfigError> {
        if self.style_url.trim().is_empty() {
            return Err(MapConfigError::EmptyStyleUrl);
        }

        let [lon, lat] = self.center;
        if !(lon.is_finite() && lat.is_finite())
            || !(-180.0..=180.0).contains(&lon)
            || !(-90.0..=90.0).contains(&lat)
        {
            return Err(MapConfigError::InvalidCenter { lon, lat });
        }

        // NaN fails every comparison below, so it is rejected too.
        let zoom_ok = self.min_zoom >= 0.0
            && self.min_zoom <= self.zoom
            && self.zoom <= self.max_zoom
            && self.max_zoom <= MAX_ZOOM_LEVEL;
        if !zoom_ok {
            return Err(MapConfigError::InvalidZoomRange {
                min: self.min_zoom,
                zoom: self.zoom,
                max: self.max_zoom,
            });
        }

        if !(0.0..=MAX_PITCH_DEG).contains(&self.pitch) {
            return Err(MapConfigError::InvalidPitch(self.pitch));
        }

        let mut seen = HashSet::new();
        for layer in &self.layers {
            if !seen.insert(&layer.id) {
                return Err(MapConfigError::DuplicateLayer(layer.id.clone()));
            }
        }

        Ok(())
    }

    pub fn layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.iter().find(|l| l.id.0 == id)
    }

    pub fn visible_layers(&self, zoom: f64) -> impl Iterator<Item = &LayerSpec> + '_ {
        self.layers.iter().filter(move |l| l.visible_at(zoom))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MapConfigBuilder {
    config: MapConfig,
}

impl MapConfigBuilder {
    pub fn style_url(mut self, url: impl Into<String>) -> Self {
        self.config.style_url = url.into();
        self
    }

    pub fn center(mut self, lon: f64, lat: f64) -> Self {
        self.config.center = [lon, lat];
        self
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.config.zoom = zoom;
        self
    }

    pub fn zoom_range(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.config.min_zoom = min_zoom;
        self.config.max_zoom = max_zoom;
        self
    }

    pub fn pitch(mut self, pitch: f64) -> Self {
        self.config.pitch = pitch;
        self
    }

    /// Replaces the whole layer set.
    pub fn layers(mut self, layers: Vec<LayerSpec>) -> Self {
        self.config.layers = layers;
        self
    }

    pub fn layer(mut self, layer: LayerSpec) -> Self {
        self.config.layers.push(layer);
        self
    }

    pub fn poi_palette(mut self, palette: PoiPalette) -> Self {
        self.config.poi_palette = palette;
        self
    }

    pub fn highlight_paint(mut self, paint: HighlightPaint) -> Self {
        self.config.highlight_paint = paint;
        self
    }

    pub fn build(self) -> Result<MapConfig, MapConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::{MapConfig, MapConfigError};
    use crate::layer::{LayerKind, LayerSpec};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_valid() {
        let cfg = MapConfig::builder().build().unwrap();
        assert_eq!(cfg, MapConfig::default());
        assert!(cfg.layer("3d-buildings").is_some());
    }

    #[test]
    fn builder_overrides_view() {
        let cfg = MapConfig::builder()
            .style_url("mapbox://styles/mapbox/light-v11")
            .center(-80.1918, 25.7617)
            .zoom_range(10.0, 20.0)
            .zoom(15.0)
            .pitch(45.0)
            .build()
            .unwrap();
        assert_eq!(cfg.center, [-80.1918, 25.7617]);
        assert_eq!(cfg.zoom, 15.0);
        let visible: Vec<&str> = cfg.visible_layers(15.0).map(|l| l.id.0.as_str()).collect();
        assert_eq!(visible, vec!["3d-buildings", "miami-pois", "poi-heat"]);
        let visible: Vec<&str> = cfg.visible_layers(11.0).map(|l| l.id.0.as_str()).collect();
        assert_eq!(visible, vec!["miami-pois", "poi-heat"]);
    }

    #[test]
    fn rejects_invalid_views() {
        assert_eq!(
            MapConfig::builder().style_url("  ").build(),
            Err(MapConfigError::EmptyStyleUrl)
        );
        assert!(matches!(
            MapConfig::builder().center(200.0, 0.0).build(),
            Err(MapConfigError::InvalidCenter { .. })
        ));
        assert!(matches!(
            MapConfig::builder().zoom(18.0).build(),
            Err(MapConfigError::InvalidZoomRange { .. })
        ));
        assert!(matches!(
            MapConfig::builder().zoom(f64::NAN).build(),
            Err(MapConfigError::InvalidZoomRange { .. })
        ));
        assert_eq!(
            MapConfig::builder().pitch(90.0).build(),
            Err(MapConfigError::InvalidPitch(90.0))
        );
    }

    #[test]
    fn rejects_duplicate_layer_ids() {
        let err = MapConfig::builder()
            .layer(LayerSpec::new("miami-pois", LayerKind::Pois))
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "duplicate layer id: miami-pois");
    }

    #[test]
    fn json_fills_missing_fields_from_defaults() {
        let cfg: MapConfig = serde_json::from_str(r#"{"center":[-77.0369,38.9072],"zoom":12}"#)
            .unwrap();
        assert_eq!(cfg.style_url, super::DEFAULT_STYLE_URL);
        assert_eq!(cfg.layers.len(), 3);
        assert!(cfg.validate().is_ok());
    }
}
