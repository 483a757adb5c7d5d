pub mod error;
pub mod geojson;
pub mod map_config;

pub use error::*;
pub use geojson::*;
pub use map_config::*;
