use std::path::PathBuf;

use compute::analysis::statistics::{HeatIntensity, Statistics};
use compute::{ProximityConfig, ProximityCorrelator};
use foundation::bounds::Aabb2;
use foundation::ids::FeatureId;
use layers::map_config::MapConfig;
use layers::query::{ViewportQuery, ViewportSource};
use scene::FeatureStateStore;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone)]
pub struct HighlightRequest {
    pub categories: Vec<String>,
    pub proximity: ProximityConfig,
    pub bbox: Option<Aabb2>,
    /// Zoom used for heat intensity; defaults to the config's initial zoom.
    pub zoom: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingReport {
    pub id: FeatureId,
    pub poi_count: u32,
    pub is_highlighted: bool,
    pub fill_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightReport {
    pub categories: Vec<String>,
    pub threshold: f64,
    pub buildings_in_view: usize,
    pub pois_in_view: usize,
    pub highlighted: Vec<BuildingReport>,
    pub mean_poi_count: Option<f64>,
    pub zoom: f64,
    pub heat_intensity: f64,
}

/// Runs one viewport-settle cycle: query, correlate, paint.
pub fn run_highlight(
    source: &impl ViewportSource,
    config: &MapConfig,
    request: &HighlightRequest,
    store: &mut FeatureStateStore,
) -> HighlightReport {
    let query = ViewportQuery {
        bbox: request.bbox,
        ..Default::default()
    };
    let rendered = source.query_rendered(&query);

    let correlator = ProximityCorrelator::new(request.proximity);
    let categories = compute::expand_categories(&request.categories);
    let state =
        correlator.correlate_categories(&rendered.buildings, &rendered.pois, &categories, store);

    let highlighted = state
        .iter()
        .map(|(id, poi_count)| {
            let feature_state = store.get(id);
            BuildingReport {
                id: id.clone(),
                poi_count,
                is_highlighted: feature_state.is_some_and(|s| s.is_highlighted),
                fill_color: config.highlight_paint.fill_color(feature_state).to_hex(),
            }
        })
        .collect();

    let zoom = request.zoom.unwrap_or(config.zoom);
    let heat = HeatIntensity::from_state(&state);
    info!(
        "highlighted {} of {} buildings for {:?}",
        state.len(),
        rendered.buildings.len(),
        request.categories
    );

    HighlightReport {
        categories: categories.iter().map(str::to_string).collect(),
        threshold: correlator.config().threshold,
        buildings_in_view: rendered.buildings.len(),
        pois_in_view: rendered.pois.len(),
        highlighted,
        mean_poi_count: Statistics::mean_poi_count(&state),
        zoom,
        heat_intensity: heat.at_zoom(zoom),
    }
}

/// Parses `minLon,minLat,maxLon,maxLat`.
pub fn parse_bbox(s: &str) -> Result<Aabb2, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("bbox {p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    if parts.iter().any(|v| !v.is_finite()) {
        return Err(format!("bbox values must be finite: {s}"));
    }
    let [min_lon, min_lat, max_lon, max_lat] = parts[..] else {
        return Err(format!("bbox needs 4 values, got {}", parts.len()));
    };
    if min_lon > max_lon || min_lat > max_lat {
        return Err(format!("bbox min exceeds max: {s}"));
    }
    Ok(Aabb2::new([min_lon, min_lat], [max_lon, max_lat]))
}

/// Parsed `atlas highlight` invocation.
#[derive(Debug, Clone)]
pub struct HighlightArgs {
    pub input: PathBuf,
    pub config_path: Option<PathBuf>,
    pub request: HighlightRequest,
}

/// Parses the arguments following `highlight`:
/// `<features.geojson> --category NAME [...] [--threshold T] [--bbox B] [--zoom Z] [--config PATH]`.
pub fn parse_highlight_args(args: &[String]) -> Result<HighlightArgs, String> {
    let Some(first) = args.first() else {
        return Err("highlight requires an input path".to_string());
    };
    let input = PathBuf::from(first);
    let mut categories: Vec<String> = Vec::new();
    let mut proximity = ProximityConfig::default();
    let mut bbox = None;
    let mut zoom: Option<f64> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--category" | "--threshold" | "--bbox" | "--zoom" | "--config" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return Err(format!("{flag} requires a value"));
                };
                match flag {
                    "--category" => categories.push(value.clone()),
                    "--threshold" => proximity.threshold = parse_non_negative(flag, value)?,
                    "--bbox" => bbox = Some(parse_bbox(value)?),
                    "--zoom" => zoom = Some(parse_non_negative(flag, value)?),
                    _ => config_path = Some(PathBuf::from(value)),
                }
            }
            other => return Err(format!("unknown arg: {other}")),
        }
        i += 1;
    }

    if categories.is_empty() {
        return Err("highlight requires at least one --category".to_string());
    }

    Ok(HighlightArgs {
        input,
        config_path,
        request: HighlightRequest {
            categories,
            proximity,
            bbox,
            zoom,
        },
    })
}

fn parse_non_negative(flag: &str, value: &str) -> Result<f64, String> {
    let v: f64 = value
        .parse()
        .map_err(|e| format!("{flag} {value:?}: {e}"))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("{flag} must be a non-negative number, got {value}"));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::{HighlightRequest, parse_bbox, parse_highlight_args, run_highlight};
    use compute::ProximityConfig;
    use foundation::bounds::Aabb2;
    use layers::map_config::MapConfig;
    use pretty_assertions::assert_eq;
    use scene::FeatureStateStore;

    const CITY: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "id": "B1",
             "geometry": {"type": "Polygon", "coordinates": [[[-80.1920,25.7610],[-80.1920,25.7612],[-80.1918,25.7612],[-80.1918,25.7610]]]},
             "properties": {"height": 30}},
            {"type": "Feature", "id": "B2",
             "geometry": {"type": "Polygon", "coordinates": [[[-80.1900,25.7600],[-80.1900,25.7602],[-80.1898,25.7602],[-80.1898,25.7600]]]},
             "properties": {"height": 12}},
            {"type": "Feature", "id": "P1",
             "geometry": {"type": "Point", "coordinates": [-80.1919, 25.7611]},
             "properties": {"type": "Pub"}},
            {"type": "Feature", "id": "P2",
             "geometry": {"type": "Point", "coordinates": [-80.19191, 25.76112]},
             "properties": {"type": "Bar"}},
            {"type": "Feature", "id": "P3",
             "geometry": {"type": "Point", "coordinates": [-80.1899, 25.7601]},
             "properties": {"type": "Cafe"}}
        ]
    }"#;

    fn request(categories: &[&str]) -> HighlightRequest {
        HighlightRequest {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            proximity: ProximityConfig::default(),
            bbox: None,
            zoom: Some(15.0),
        }
    }

    #[test]
    fn bar_request_paints_matching_building() {
        let set = formats::parse_feature_set(CITY).unwrap();
        let mut store = FeatureStateStore::new();
        let report = run_highlight(&set, &MapConfig::default(), &request(&["bar"]), &mut store);

        assert_eq!(report.categories, vec!["bar".to_string(), "pub".to_string()]);
        assert_eq!(report.highlighted.len(), 1);
        assert_eq!(report.highlighted[0].id.as_str(), "B1");
        assert_eq!(report.highlighted[0].poi_count, 2);
        assert!(report.highlighted[0].is_highlighted);
        assert_eq!(report.highlighted[0].fill_color, "#ff9b3a");
        // factor = 2/3, intensity at zoom 15 = 1.5 * 2/3.
        assert!((report.heat_intensity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bbox_limits_the_viewport() {
        let set = formats::parse_feature_set(CITY).unwrap();
        let mut store = FeatureStateStore::new();
        let mut req = request(&["restaurant"]);
        let report = run_highlight(&set, &MapConfig::default(), &req, &mut store);
        assert_eq!(report.highlighted.len(), 1);
        assert_eq!(report.highlighted[0].id.as_str(), "B2");

        req.bbox = Some(Aabb2::new([-80.1925, 25.7605], [-80.1915, 25.7615]));
        let report = run_highlight(&set, &MapConfig::default(), &req, &mut store);
        assert_eq!(report.buildings_in_view, 1);
        assert!(report.highlighted.is_empty());
        assert_eq!(report.heat_intensity, 0.0);
        assert_eq!(store.highlighted().count(), 0);
    }

    #[test]
    fn bbox_parsing() {
        assert_eq!(
            parse_bbox("-80.2, 25.7,-80.1,25.8").unwrap(),
            Aabb2::new([-80.2, 25.7], [-80.1, 25.8])
        );
        assert!(parse_bbox("1,2,3").is_err());
        assert!(parse_bbox("1,2,x,4").is_err());
        assert!(parse_bbox("3,2,1,4").is_err());
        assert!(parse_bbox("NaN,0,1,1").is_err());
        assert!(parse_bbox("0,0,inf,1").is_err());
    }

    #[test]
    fn nan_bbox_selects_nothing() {
        let set = formats::parse_feature_set(CITY).unwrap();
        let mut store = FeatureStateStore::new();
        let mut req = request(&["bar"]);
        req.bbox = Some(Aabb2::new([f64::NAN, 25.76], [-80.18, 25.77]));
        let report = run_highlight(&set, &MapConfig::default(), &req, &mut store);
        // Neither buildings nor POIs can be placed inside a NaN extent.
        assert_eq!(report.buildings_in_view, 0);
        assert_eq!(report.pois_in_view, 0);
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn highlight_args_collect_flags() {
        let parsed = parse_highlight_args(&args(&[
            "city.geojson",
            "--category",
            "bar",
            "--category",
            "restaurant",
            "--threshold",
            "0.0005",
            "--bbox",
            "-80.2,25.7,-80.1,25.8",
            "--zoom",
            "14",
            "--config",
            "map.json",
        ]))
        .unwrap();
        assert_eq!(parsed.input.to_str(), Some("city.geojson"));
        assert_eq!(parsed.config_path.as_deref().and_then(|p| p.to_str()), Some("map.json"));
        assert_eq!(parsed.request.categories, vec!["bar", "restaurant"]);
        assert_eq!(parsed.request.proximity.threshold, 0.0005);
        assert_eq!(parsed.request.zoom, Some(14.0));
        assert!(parsed.request.bbox.is_some());
    }

    #[test]
    fn highlight_args_defaults() {
        let parsed = parse_highlight_args(&args(&["city.geojson", "--category", "bar"])).unwrap();
        assert_eq!(parsed.request.proximity, ProximityConfig::default());
        assert!(parsed.request.bbox.is_none());
        assert!(parsed.request.zoom.is_none());
        assert!(parsed.config_path.is_none());
    }

    #[test]
    fn highlight_args_rejections() {
        assert!(parse_highlight_args(&[]).is_err());
        assert_eq!(
            parse_highlight_args(&args(&["city.geojson"])).unwrap_err(),
            "highlight requires at least one --category"
        );
        assert_eq!(
            parse_highlight_args(&args(&["city.geojson", "--category"])).unwrap_err(),
            "--category requires a value"
        );
        assert!(
            parse_highlight_args(&args(&["c.geojson", "--category", "bar", "--threshold", "-1"]))
                .is_err()
        );
        assert!(
            parse_highlight_args(&args(&["c.geojson", "--category", "bar", "--zoom", "NaN"]))
                .is_err()
        );
        assert_eq!(
            parse_highlight_args(&args(&["c.geojson", "--category", "bar", "--verbose"]))
                .unwrap_err(),
            "unknown arg: --verbose"
        );
    }
}
