use crate::clustering::cluster::{nearest_cluster_index, Cluster, ClusterItem};
use crate::clustering::error::ClusterError;
use crate::core::float::GeoFloat;
use log::{debug, info};

/// Parameters for a clustering run.
#[derive(Debug, Clone, Copy)]
pub struct KMeansParams {
    /// Number of clusters to produce. Must be at least 1 and no larger than
    /// the number of items.
    pub number_of_clusters: usize,
    /// Total pass budget, counting the initial round-robin assignment as the
    /// first pass: a budget of `m` performs the initial assignment plus
    /// `m - 1` reassignment passes. Must be at least 1. There is no
    /// convergence test; the loop always spends its full budget.
    pub max_iterations: usize,
}

/// Iterative centroid-based clustering over a borrowed slice of items.
///
/// The engine owns its clusters for the duration of a run; items are only
/// ever referenced by index, so each item belongs to exactly one cluster at
/// any time. Runs are independent: nothing persists between instances.
pub struct KMeansClustering<'a, T, F: GeoFloat> {
    clusters: Vec<Cluster<F>>,
    items: &'a [ClusterItem<T, F>],
    params: KMeansParams,
}

impl<'a, T, F: GeoFloat> KMeansClustering<'a, T, F> {
    /// Validates the inputs and prepares an engine. No cluster is built until
    /// [`fit`](Self::fit), so a failed construction leaves nothing behind.
    pub fn new(params: KMeansParams, items: &'a [ClusterItem<T, F>]) -> Result<Self, ClusterError> {
        if items.is_empty() {
            return Err(ClusterError::NoItems);
        }
        if params.number_of_clusters == 0 {
            return Err(ClusterError::invalid_parameter(
                "number_of_clusters must be greater than 0",
            ));
        }
        if params.max_iterations == 0 {
            return Err(ClusterError::invalid_parameter(
                "max_iterations must be greater than 0",
            ));
        }
        if params.number_of_clusters > items.len() {
            return Err(ClusterError::insufficient_items(
                params.number_of_clusters,
                items.len(),
            ));
        }

        Ok(Self {
            clusters: Vec::new(),
            items,
            params,
        })
    }

    /// Runs the full clustering: one initial assignment, then the remaining
    /// budget of reassignment passes.
    pub fn fit(&mut self) -> Result<(), ClusterError> {
        info!(
            "Clustering {} items into {} clusters with an iteration budget of {}",
            self.items.len(),
            self.params.number_of_clusters,
            self.params.max_iterations
        );

        self.initialize_clusters()?;
        for pass in 1..self.params.max_iterations {
            debug!("Reassignment pass {}", pass);
            self.reassign()?;
        }
        Ok(())
    }

    /// Distributes items round-robin by index modulo the cluster count.
    ///
    /// A cheap deterministic seed, independent of geographic position; the
    /// reassignment passes do the actual spatial work. Validation guarantees
    /// every cluster receives at least one item here.
    fn initialize_clusters(&mut self) -> Result<(), ClusterError> {
        let k = self.params.number_of_clusters;
        self.clusters = (0..k).map(|_| Cluster::empty()).collect();

        for index in 0..self.items.len() {
            self.clusters[index % k].push(index);
        }

        self.recalculate_centroids()
    }

    /// One reassignment pass: clear all membership, move every item to its
    /// nearest cluster by the current centroids, then recompute centroids.
    ///
    /// Clearing and rebuilding from scratch is what maintains the partition
    /// invariant; membership is never updated in place.
    fn reassign(&mut self) -> Result<(), ClusterError> {
        let previous_sizes: Vec<usize> = self.clusters.iter().map(Cluster::len).collect();

        for cluster in &mut self.clusters {
            cluster.clear();
        }

        for (index, item) in self.items.iter().enumerate() {
            // Validation guarantees at least one cluster, so the scan cannot
            // come back empty
            let nearest = nearest_cluster_index(&self.clusters, item.position())
                .ok_or(ClusterError::EmptyCluster)?;
            self.clusters[nearest].push(index);
        }

        for (index, cluster) in self.clusters.iter().enumerate() {
            if cluster.len() != previous_sizes[index] {
                debug!(
                    "Cluster {} size changed from {} to {}",
                    index,
                    previous_sizes[index],
                    cluster.len()
                );
            }
        }

        self.recalculate_centroids()
    }

    /// Recomputes every non-empty cluster's centroid. A cluster that lost all
    /// of its members in the last pass keeps its previous centroid, so it can
    /// still win items back in a later pass.
    fn recalculate_centroids(&mut self) -> Result<(), ClusterError> {
        for (index, cluster) in self.clusters.iter_mut().enumerate() {
            if cluster.is_empty() {
                debug!("Cluster {} has no members, keeping its centroid", index);
                continue;
            }
            cluster.recalculate_centroid(self.items)?;
        }
        Ok(())
    }

    /// The clusters, in the index order established at initial assignment.
    pub fn clusters(&self) -> &[Cluster<F>] {
        &self.clusters
    }

    pub fn into_clusters(self) -> Vec<Cluster<F>> {
        self.clusters
    }

    /// Returns the cluster index for each item, in item order. Only
    /// meaningful after [`fit`](Self::fit).
    pub fn assignments(&self) -> Vec<usize> {
        let mut assignments = vec![0usize; self.items.len()];
        for (cluster_index, cluster) in self.clusters.iter().enumerate() {
            for &member in cluster.members() {
                assignments[member] = cluster_index;
            }
        }
        assignments
    }

    /// Iterates the payloads of a cluster's members.
    pub fn values_of<'c>(&'c self, cluster: &'c Cluster<F>) -> impl Iterator<Item = &'c T> {
        let items: &'c [ClusterItem<T, F>] = self.items;
        cluster.members().iter().map(move |&index| items[index].value())
    }
}

/// One-shot convenience wrapper: validate, fit, return the clusters.
pub fn compute_clustering<T, F: GeoFloat>(
    items: &[ClusterItem<T, F>],
    params: KMeansParams,
) -> Result<Vec<Cluster<F>>, ClusterError> {
    let mut clustering = KMeansClustering::new(params, items)?;
    clustering.fit()?;
    Ok(clustering.into_clusters())
}
