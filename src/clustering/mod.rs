pub mod cluster;
pub mod config;
pub mod error;
pub mod kmeans;
pub mod ranking;

pub use cluster::{nearest_cluster, nearest_cluster_index, Cluster, ClusterItem};
pub use config::Config;
pub use error::ClusterError;
pub use kmeans::{compute_clustering, KMeansClustering, KMeansParams};
pub use ranking::{move_overflow_to, ClusterRanking};
