use crate::core::float::GeoFloat;
use serde::{Deserialize, Serialize};

/// A position on the globe, in degrees.
///
/// The struct itself is unbounded so the serde derives stay unambiguous;
/// every operation requires [`GeoFloat`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint<F> {
    pub latitude: F,
    pub longitude: F,
}

impl<F: GeoFloat> GeoPoint<F> {
    pub fn new(latitude: F, longitude: F) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A point on the unit sphere as a 3D vector.
///
/// This is the working representation for all distance comparisons and
/// centroid math; callers see [`GeoPoint`]s at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianPoint<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: GeoFloat> CartesianPoint<F> {
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Projects a latitude/longitude onto the unit sphere.
    pub fn from_geo(point: &GeoPoint<F>) -> Self {
        let lat = point.latitude.to_radians();
        let lon = point.longitude.to_radians();
        Self {
            x: lat.cos() * lon.cos(),
            y: lat.cos() * lon.sin(),
            z: lat.sin(),
        }
    }

    /// Inverse projection back to latitude/longitude in degrees.
    ///
    /// Defined for any non-zero vector; the vector does not have to be
    /// normalized.
    pub fn to_geo(&self) -> GeoPoint<F> {
        let norm = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        GeoPoint {
            latitude: (self.z / norm).asin().to_degrees(),
            longitude: self.y.atan2(self.x).to_degrees(),
        }
    }

    /// Squared Euclidean (chord) distance between two unit-sphere points.
    ///
    /// Monotonically related to great-circle distance, so it orders points
    /// correctly, but it is NOT a physical distance. Use it as a comparison
    /// key only.
    #[inline]
    pub fn squared_distance(&self, other: &Self) -> F {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}

/// Computes the geographic midpoint of a set of unit-sphere points: the mean
/// of the vectors, re-normalized back onto the sphere.
///
/// Returns `None` for an empty input, or for a degenerate set whose vectors
/// cancel exactly (zero-norm mean).
pub fn geographic_midpoint<F, I>(points: I) -> Option<CartesianPoint<F>>
where
    F: GeoFloat,
    I: IntoIterator<Item = CartesianPoint<F>>,
{
    let mut sum_x = F::zero();
    let mut sum_y = F::zero();
    let mut sum_z = F::zero();
    let mut count = 0usize;

    for point in points {
        sum_x += point.x;
        sum_y += point.y;
        sum_z += point.z;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let n = F::from_usize(count)?;
    let mean = CartesianPoint::new(sum_x / n, sum_y / n, sum_z / n);
    let norm = (mean.x * mean.x + mean.y * mean.y + mean.z * mean.z).sqrt();
    if norm == F::zero() {
        return None;
    }

    Some(CartesianPoint::new(
        mean.x / norm,
        mean.y / norm,
        mean.z / norm,
    ))
}
