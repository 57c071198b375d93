use crate::clustering::cluster::{Cluster, ClusterItem};
use crate::core::float::GeoFloat;
use crate::geometry::CartesianPoint;
use std::cmp::Ordering;

/// A disposable view of a cluster's members sorted by distance to its
/// centroid, nearest first.
///
/// The centroid is captured at construction, so a ranking is only valid while
/// the source cluster's membership is unchanged. Build one, use it, drop it;
/// never store it alongside the cluster.
#[derive(Debug)]
pub struct ClusterRanking<F: GeoFloat> {
    centroid: CartesianPoint<F>,
    ordered: Vec<usize>,
}

impl<F: GeoFloat> ClusterRanking<F> {
    pub fn new<T>(cluster: &Cluster<F>, items: &[ClusterItem<T, F>]) -> Self {
        let centroid = *cluster.centroid();
        let mut by_distance: Vec<(usize, F)> = cluster
            .members()
            .iter()
            .map(|&index| (index, items[index].position().squared_distance(&centroid)))
            .collect();
        // Stable sort keeps member order deterministic for equal distances
        by_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

        Self {
            centroid,
            ordered: by_distance.into_iter().map(|(index, _)| index).collect(),
        }
    }

    /// The centroid the ranking was computed against.
    pub fn centroid(&self) -> &CartesianPoint<F> {
        &self.centroid
    }

    /// Member indices sorted ascending by squared distance to the centroid.
    pub fn members(&self) -> &[usize] {
        &self.ordered
    }
}

/// Moves the farthest-from-centroid members of `source` into `target` until
/// `source` is down to `keep_count` members, and returns the number moved.
///
/// The `keep_count` members nearest to the pre-move centroid stay in
/// `source`; the rest are appended to `target` in ranked order. A no-op when
/// `keep_count >= source.len()`.
///
/// Neither centroid is recomputed here: the caller must invoke
/// [`Cluster::recalculate_centroid`] on both clusters before using them for
/// distance comparisons again.
pub fn move_overflow_to<T, F: GeoFloat>(
    source: &mut Cluster<F>,
    target: &mut Cluster<F>,
    items: &[ClusterItem<T, F>],
    keep_count: usize,
) -> usize {
    if keep_count >= source.len() {
        return 0;
    }

    let ranking = ClusterRanking::new(source, items);
    let kept = ranking.members()[..keep_count].to_vec();
    let overflow = &ranking.members()[keep_count..];

    target.extend(overflow);
    let moved = overflow.len();
    source.set_members(kept);
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeoPoint;

    // Index 0 sits at the centroid-to-be, the rest fan out eastwards
    fn fan_items() -> Vec<ClusterItem<usize, f64>> {
        [(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (0.0, 4.0)]
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| ClusterItem::new(i, GeoPoint::new(lat, lon)))
            .collect()
    }

    #[test]
    fn test_ranking_sorts_ascending_by_distance() {
        let items = fan_items();
        // Shuffled member order; ranking must impose distance order
        let cluster = Cluster::from_members(vec![3, 0, 4, 1, 2], &items).unwrap();
        let ranking = ClusterRanking::new(&cluster, &items);

        let centroid = *ranking.centroid();
        let distances: Vec<f64> = ranking
            .members()
            .iter()
            .map(|&index| items[index].position().squared_distance(&centroid))
            .collect();
        assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_move_overflow_keep_zero_moves_everything() {
        let items = fan_items();
        let mut source = Cluster::from_members(vec![0, 1, 2], &items).unwrap();
        let mut target = Cluster::from_members(vec![3, 4], &items).unwrap();

        let moved = move_overflow_to(&mut source, &mut target, &items, 0);

        assert_eq!(moved, 3);
        assert!(source.is_empty());
        assert_eq!(target.len(), 5);
    }

    #[test]
    fn test_move_overflow_noop_when_keep_count_covers_cluster() {
        let items = fan_items();
        let mut source = Cluster::from_members(vec![0, 1], &items).unwrap();
        let mut target = Cluster::from_members(vec![2], &items).unwrap();

        let moved = move_overflow_to(&mut source, &mut target, &items, 2);

        assert_eq!(moved, 0);
        assert_eq!(source.len(), 2);
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn test_move_overflow_keeps_nearest_members() {
        let items = fan_items();
        // Centroid of the fan's first four points lands between indices 1 and 2
        let mut source = Cluster::from_members(vec![0, 1, 2, 3], &items).unwrap();
        let mut target = Cluster::from_members(vec![4], &items).unwrap();

        let moved = move_overflow_to(&mut source, &mut target, &items, 2);

        assert_eq!(moved, 2);
        // The two members nearest the pre-move centroid survive the move
        assert_eq!(source.len(), 2);
        assert!(source.members().contains(&1));
        assert!(source.members().contains(&2));
        // The fan's extremes end up in the target
        assert_eq!(target.len(), 3);
        assert!(target.members().contains(&0));
        assert!(target.members().contains(&3));
    }
}
