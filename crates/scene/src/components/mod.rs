pub mod building;
pub mod poi;

pub use building::*;
pub use poi::*;

/// Raw coordinate as delivered by the map (GeoJSON position shape).
///
/// Only positions with exactly two finite components are usable; anything
/// else is kept as-is so malformed input can be excluded downstream instead
/// of rejected at load time.
pub type Position = Vec<f64>;
