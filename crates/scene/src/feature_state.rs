use std::collections::BTreeMap;

use foundation::ids::FeatureId;
use serde::{Deserialize, Serialize};

/// Per-feature annotations read by paint expressions.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureState {
    pub is_highlighted: bool,
    pub poi_count: u32,
}

/// Owned feature-state store keyed by feature id.
///
/// Ordering contract:
/// - Iteration yields ids in ascending `FeatureId` order.
///
/// Cleared features keep an entry with `is_highlighted == false`, mirroring
/// how a map SDK retains state it has been told about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureStateStore {
    states: BTreeMap<FeatureId, FeatureState>,
}

impl FeatureStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &FeatureId) -> Option<FeatureState> {
        self.states.get(id).copied()
    }

    pub fn set(&mut self, id: FeatureId, state: FeatureState) {
        self.states.insert(id, state);
    }

    pub fn is_highlighted(&self, id: &FeatureId) -> bool {
        self.states.get(id).is_some_and(|s| s.is_highlighted)
    }

    /// Marks `id` as highlighted with `poi_count` matches.
    ///
    /// Returns `true` if the stored state changed.
    pub fn highlight(&mut self, id: FeatureId, poi_count: u32) -> bool {
        let next = FeatureState {
            is_highlighted: true,
            poi_count,
        };
        self.states.insert(id, next) != Some(next)
    }

    /// Clears the highlight on `id`.
    ///
    /// Returns `true` if the feature was highlighted before.
    pub fn clear_highlight(&mut self, id: &FeatureId) -> bool {
        let Some(state) = self.states.get_mut(id) else {
            return false;
        };
        let was = state.is_highlighted;
        *state = FeatureState::default();
        was
    }

    /// Iterates currently highlighted ids in ascending order.
    pub fn highlighted(&self) -> impl Iterator<Item = &FeatureId> + '_ {
        self.states
            .iter()
            .filter(|(_, s)| s.is_highlighted)
            .map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FeatureId, &FeatureState)> + '_ {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}
