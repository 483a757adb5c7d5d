use super::proximity::HighlightState;

pub struct Statistics;

impl Statistics {
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Mean POI count over highlighted buildings.
    pub fn mean_poi_count(state: &HighlightState) -> Option<f64> {
        let counts: Vec<f64> = state.iter().map(|(_, n)| n as f64).collect();
        Self::mean(&counts)
    }
}

/// POI heat-map intensity scaled by the densest highlighted building.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeatIntensity {
    pub factor: f64,
}

impl HeatIntensity {
    pub const MAX_FACTOR: f64 = 2.0;
    /// `(zoom, intensity multiplier)` stops, linear in between.
    const LOW_STOP: (f64, f64) = (12.0, 0.5);
    const HIGH_STOP: (f64, f64) = (15.0, 1.5);

    /// `factor = min(max_count / 3, 2)`; zero for an empty state.
    pub fn from_state(state: &HighlightState) -> Self {
        let max = state.max_count().unwrap_or(0) as f64;
        Self {
            factor: (max / 3.0).min(Self::MAX_FACTOR),
        }
    }

    /// Heat-map intensity at `zoom`, clamped to the end stops.
    pub fn at_zoom(&self, zoom: f64) -> f64 {
        let (z0, v0) = Self::LOW_STOP;
        let (z1, v1) = Self::HIGH_STOP;
        let t = ((zoom - z0) / (z1 - z0)).clamp(0.0, 1.0);
        (v0 + (v1 - v0) * t) * self.factor
    }
}
