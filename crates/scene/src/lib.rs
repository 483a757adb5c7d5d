pub mod components;
pub mod feature_state;
pub mod world;

pub use feature_state::*;
pub use world::*;
