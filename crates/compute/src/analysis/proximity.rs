use std::collections::BTreeMap;

use foundation::ids::FeatureId;
use foundation::math::Vec2;
use scene::FeatureStateStore;
use scene::components::{Building, Poi};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::categories::{CategorySet, expand_categories};
use super::spatial::SpatialAnalysis;

/// Default match radius in degrees, roughly 20 m at mid-latitudes.
///
/// Planar degrees shrink east-west with latitude; the value is not corrected
/// for that.
pub const DEFAULT_THRESHOLD: f64 = 0.0002;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    /// Strict upper bound on centroid-to-POI distance, in map units.
    pub threshold: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Building id → number of matching POIs. Every count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    counts: BTreeMap<FeatureId, u32>,
}

impl HighlightState {
    pub fn count(&self, id: &FeatureId) -> Option<u32> {
        self.counts.get(id).copied()
    }

    pub fn contains(&self, id: &FeatureId) -> bool {
        self.counts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(building id, count)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&FeatureId, u32)> + '_ {
        self.counts.iter().map(|(id, n)| (id, *n))
    }

    pub fn max_count(&self) -> Option<u32> {
        self.counts.values().copied().max()
    }

    pub fn total_matches(&self) -> u64 {
        self.counts.values().map(|n| *n as u64).sum()
    }
}

/// Correlates rendered buildings with nearby POIs of requested categories.
///
/// Each call recomputes from scratch; the only side effect is on the
/// feature-state store passed in.
#[derive(Debug, Clone, Default)]
pub struct ProximityCorrelator {
    config: ProximityConfig,
}

impl ProximityCorrelator {
    pub fn new(config: ProximityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    /// Expands `categories` through the alias table, then correlates.
    pub fn correlate<S: AsRef<str>>(
        &self,
        buildings: &[Building],
        pois: &[Poi],
        categories: &[S],
        store: &mut FeatureStateStore,
    ) -> HighlightState {
        let categories = expand_categories(categories);
        self.correlate_categories(buildings, pois, &categories, store)
    }

    pub fn correlate_categories(
        &self,
        buildings: &[Building],
        pois: &[Poi],
        categories: &CategorySet,
        store: &mut FeatureStateStore,
    ) -> HighlightState {
        let relevant: Vec<Vec2> = pois
            .iter()
            .filter(|poi| categories.matches(&poi.category))
            .filter_map(|poi| {
                let point = poi.point();
                if point.is_none() {
                    debug!("poi {} has no usable position; skipped", poi.id);
                }
                point
            })
            .collect();

        let mut counts: BTreeMap<FeatureId, u32> = BTreeMap::new();
        if !relevant.is_empty() {
            for building in buildings {
                let Some(center) = SpatialAnalysis::ring_centroid(&building.ring) else {
                    debug!("building {} has no valid coordinates; skipped", building.id);
                    continue;
                };
                let threshold = self.config.threshold;
                let matches = relevant
                    .iter()
                    .filter(|p| SpatialAnalysis::planar_distance(center, **p) < threshold)
                    .count();
                if matches > 0 {
                    add_matches(&mut counts, &building.id, matches);
                }
            }
        }

        let state = HighlightState { counts };
        apply_highlights(&state, store);

        debug!(
            "correlated {} buildings against {} of {} pois: {} highlighted",
            buildings.len(),
            relevant.len(),
            pois.len(),
            state.len()
        );
        state
    }
}

/// Adds `matches` to the building's running count, saturating at `u32::MAX`.
fn add_matches(counts: &mut BTreeMap<FeatureId, u32>, id: &FeatureId, matches: usize) {
    let matches = u32::try_from(matches).unwrap_or(u32::MAX);
    let entry = counts.entry(id.clone()).or_insert(0);
    *entry = entry.saturating_add(matches);
}

/// Clears stale highlights, then writes the current counts.
fn apply_highlights(state: &HighlightState, store: &mut FeatureStateStore) {
    let stale: Vec<FeatureId> = store
        .highlighted()
        .filter(|id| !state.contains(id))
        .cloned()
        .collect();
    for id in &stale {
        store.clear_highlight(id);
    }
    for (id, count) in state.iter() {
        store.highlight(id.clone(), count);
    }
}
