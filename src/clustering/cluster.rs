use crate::clustering::error::ClusterError;
use crate::core::float::GeoFloat;
use crate::geometry::{geographic_midpoint, CartesianPoint, GeoPoint};

/// An opaque caller payload pinned to a fixed position on the unit sphere.
///
/// The position is converted from latitude/longitude once, at construction,
/// and never changes afterwards.
#[derive(Debug)]
pub struct ClusterItem<T, F: GeoFloat> {
    value: T,
    position: CartesianPoint<F>,
}

impl<T, F: GeoFloat> ClusterItem<T, F> {
    pub fn new(value: T, location: GeoPoint<F>) -> Self {
        Self {
            value,
            position: CartesianPoint::from_geo(&location),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn position(&self) -> &CartesianPoint<F> {
        &self.position
    }
}

/// A group of items plus the geographic midpoint of their positions.
///
/// Members are indices into the caller's `&[ClusterItem]` slice, so items are
/// never duplicated: moving an item between clusters moves its index. The
/// centroid is only valid while membership is unchanged; every mutation must
/// be followed by [`Cluster::recalculate_centroid`] before the cluster is
/// used for distance comparisons again.
#[derive(Debug, Clone)]
pub struct Cluster<F: GeoFloat> {
    members: Vec<usize>,
    centroid: CartesianPoint<F>,
}

impl<F: GeoFloat> Cluster<F> {
    /// Builds a cluster from member indices and computes its centroid.
    ///
    /// Fails with [`ClusterError::EmptyCluster`] if `members` is empty, so a
    /// successfully constructed cluster always carries a valid centroid.
    pub fn from_members<T>(
        members: Vec<usize>,
        items: &[ClusterItem<T, F>],
    ) -> Result<Self, ClusterError> {
        let mut cluster = Self {
            members,
            centroid: CartesianPoint::new(F::zero(), F::zero(), F::zero()),
        };
        cluster.recalculate_centroid(items)?;
        Ok(cluster)
    }

    /// An empty cluster with a placeholder centroid. Only the engine builds
    /// these, and it recomputes every centroid before the first distance
    /// comparison.
    pub(crate) fn empty() -> Self {
        Self {
            members: Vec::new(),
            centroid: CartesianPoint::new(F::zero(), F::zero(), F::zero()),
        }
    }

    /// Member indices into the item slice the cluster was built against.
    /// Order carries no meaning.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn centroid(&self) -> &CartesianPoint<F> {
        &self.centroid
    }

    /// The centroid converted back to latitude/longitude.
    pub fn centroid_geo(&self) -> GeoPoint<F> {
        self.centroid.to_geo()
    }

    /// Sets the centroid to the geographic midpoint of the current members.
    ///
    /// Fails with [`ClusterError::EmptyCluster`] on an empty cluster, leaving
    /// the previous centroid untouched.
    pub fn recalculate_centroid<T>(
        &mut self,
        items: &[ClusterItem<T, F>],
    ) -> Result<(), ClusterError> {
        let midpoint = geographic_midpoint(self.members.iter().map(|&index| items[index].position))
            .ok_or(ClusterError::EmptyCluster)?;
        self.centroid = midpoint;
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.members.clear();
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.members.push(index);
    }

    pub(crate) fn extend(&mut self, indices: &[usize]) {
        self.members.extend_from_slice(indices);
    }

    pub(crate) fn set_members(&mut self, members: Vec<usize>) {
        self.members = members;
    }
}

/// Returns the index of the cluster whose centroid is nearest to `point`, or
/// `None` if `clusters` is empty.
///
/// Ties break to the first cluster in iteration order, so the result is
/// deterministic for a fixed cluster ordering.
pub fn nearest_cluster_index<F: GeoFloat>(
    clusters: &[Cluster<F>],
    point: &CartesianPoint<F>,
) -> Option<usize> {
    let mut nearest: Option<(usize, F)> = None;

    for (index, cluster) in clusters.iter().enumerate() {
        let distance = cluster.centroid.squared_distance(point);
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((index, distance)),
        }
    }

    nearest.map(|(index, _)| index)
}

/// Reference-returning variant of [`nearest_cluster_index`].
pub fn nearest_cluster<'a, F: GeoFloat>(
    clusters: &'a [Cluster<F>],
    point: &CartesianPoint<F>,
) -> Option<&'a Cluster<F>> {
    nearest_cluster_index(clusters, point).map(|index| &clusters[index])
}
