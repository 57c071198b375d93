pub mod spherical;

pub use spherical::{geographic_midpoint, CartesianPoint, GeoPoint};
