use std::fs;
use std::path::Path;

use foundation::ids::FeatureId;
use scene::FeatureSet;
use scene::components::{Building, Poi, Position};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::FormatError;

const HEIGHT_KEYS: &[&str] = &["height", "render_height"];
const CATEGORY_KEYS: &[&str] = &["type", "category"];

pub fn load_feature_set(path: impl AsRef<Path>) -> Result<FeatureSet, FormatError> {
    let payload = fs::read_to_string(path.as_ref()).map_err(FormatError::Io)?;
    parse_feature_set(&payload)
}

/// Reads a GeoJSON FeatureCollection into buildings and POIs.
///
/// - Polygon / MultiPolygon features with a numeric `height` (or
///   `render_height`) property become buildings; the outer ring of the first
///   polygon is the footprint.
/// - Point features with a string `type` (or `category`) property become POIs.
/// - Everything else is skipped.
///
/// Coordinates are not validated here. Non-numeric components become NaN so
/// the feature is excluded by downstream analysis rather than failing the load.
pub fn parse_feature_set(payload: &str) -> Result<FeatureSet, FormatError> {
    let root: Value = serde_json::from_str(payload).map_err(FormatError::Parse)?;
    let is_collection = root.get("type").and_then(Value::as_str) == Some("FeatureCollection");
    let Some(features) = root.get("features").and_then(Value::as_array) else {
        return Err(FormatError::NotFeatureCollection);
    };
    if !is_collection {
        return Err(FormatError::NotFeatureCollection);
    }

    let mut set = FeatureSet::new();
    let mut skipped = 0usize;
    for (index, feature) in features.iter().enumerate() {
        let Some(geometry) = feature.get("geometry") else {
            skipped += 1;
            continue;
        };
        let empty = Map::new();
        let props = feature
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let id = feature_id(feature, props, index);

        match geometry.get("type").and_then(Value::as_str) {
            Some("Polygon") => {
                let ring = geometry
                    .get("coordinates")
                    .and_then(|rings| rings.get(0))
                    .map(ring_positions);
                match (ring, number_prop(props, HEIGHT_KEYS)) {
                    (Some(ring), Some(height)) => set.add_building(Building::new(id, ring, height)),
                    _ => skipped += 1,
                }
            }
            Some("MultiPolygon") => {
                let ring = geometry
                    .get("coordinates")
                    .and_then(|polys| polys.get(0))
                    .and_then(|rings| rings.get(0))
                    .map(ring_positions);
                match (ring, number_prop(props, HEIGHT_KEYS)) {
                    (Some(ring), Some(height)) => set.add_building(Building::new(id, ring, height)),
                    _ => skipped += 1,
                }
            }
            Some("Point") => {
                let position = geometry
                    .get("coordinates")
                    .map(position)
                    .unwrap_or_default();
                match string_prop(props, CATEGORY_KEYS) {
                    Some(category) => set.add_poi(Poi::new(id, position, category)),
                    None => skipped += 1,
                }
            }
            _ => skipped += 1,
        }
    }

    debug!(
        "geojson: {} buildings, {} pois, {} features skipped",
        set.buildings().len(),
        set.pois().len(),
        skipped
    );
    Ok(set)
}

fn feature_id(feature: &Value, props: &Map<String, Value>, index: usize) -> FeatureId {
    let raw = feature.get("id").or_else(|| props.get("id"));
    match raw {
        Some(Value::String(s)) => FeatureId::new(s.as_str()),
        Some(Value::Number(n)) => FeatureId::new(n.to_string()),
        _ => FeatureId::new(format!("f{index}")),
    }
}

fn number_prop(props: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| props.get(*k).and_then(Value::as_f64))
}

fn string_prop(props: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| props.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

fn position(value: &Value) -> Position {
    match value.as_array() {
        Some(components) => components
            .iter()
            .map(|c| c.as_f64().unwrap_or(f64::NAN))
            .collect(),
        None => Vec::new(),
    }
}

fn ring_positions(value: &Value) -> Vec<Position> {
    value
        .as_array()
        .map(|points| points.iter().map(position).collect())
        .unwrap_or_default()
}
