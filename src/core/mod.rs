pub mod float;

pub use float::GeoFloat;
