pub mod categories;
pub mod proximity;
pub mod spatial;
pub mod statistics;
