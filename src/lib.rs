/// geocluster: size-balanced geographic clustering on the unit sphere.
///
/// Groups geographically-located items (an opaque payload plus a
/// latitude/longitude) into a fixed number of spatially compact clusters,
/// using an iterative centroid-based algorithm, with an optional balancing
/// pass for capping cluster sizes.
///
/// # Modules
/// - `geometry`: spherical/Cartesian conversion, chord distance, midpoints.
/// - `clustering`: the cluster model, the K-means engine and the balancer.
pub mod clustering;
pub mod core;
pub mod geometry;
