use foundation::color::Rgb;
use scene::FeatureState;
use serde::{Deserialize, Serialize};

/// Fill-color ramp for the building layer, driven by feature state.
///
/// Highlighted buildings interpolate linearly between `low` at `low_count`
/// and `high` at `high_count`, clamped outside that range. Everything else
/// gets `base`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightPaint {
    pub base: Rgb,
    pub low: Rgb,
    pub high: Rgb,
    pub low_count: u32,
    pub high_count: u32,
}

impl Default for HighlightPaint {
    fn default() -> Self {
        Self {
            base: Rgb::new(0x1a, 0x1a, 0x1a),
            low: Rgb::new(0xff, 0xb7, 0x4d),
            high: Rgb::new(0xff, 0x45, 0x00),
            low_count: 1,
            high_count: 5,
        }
    }
}

impl HighlightPaint {
    pub fn fill_color(&self, state: Option<FeatureState>) -> Rgb {
        match state {
            Some(s) if s.is_highlighted => self.ramp(s.poi_count),
            _ => self.base,
        }
    }

    fn ramp(&self, poi_count: u32) -> Rgb {
        if self.high_count <= self.low_count {
            return if poi_count >= self.high_count {
                self.high
            } else {
                self.low
            };
        }
        let span = (self.high_count - self.low_count) as f64;
        let t = (poi_count as f64 - self.low_count as f64) / span;
        self.low.lerp(self.high, t)
    }
}
