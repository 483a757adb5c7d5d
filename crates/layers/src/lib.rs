pub mod layer;
pub mod map_config;
pub mod palette;
pub mod query;
pub mod stylesheet;
pub mod symbology;

pub use layer::*;
