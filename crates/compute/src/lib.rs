pub mod analysis;

pub use analysis::categories::{CategorySet, expand_categories};
pub use analysis::proximity::{HighlightState, ProximityConfig, ProximityCorrelator};
