//! Error types for clustering operations.

use thiserror::Error;

/// Errors surfaced by the cluster model and the clustering engine.
///
/// All of these are precondition violations: the algorithm itself is a pure
/// computation with no I/O and cannot fail once its inputs are validated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterError {
    /// The item source is empty.
    #[error("no items to cluster")]
    NoItems,

    /// More clusters were requested than there are items to fill them.
    #[error("not enough items: requested {requested} clusters for {actual} items")]
    InsufficientItems {
        /// Number of clusters requested
        requested: usize,
        /// Number of items provided
        actual: usize,
    },

    /// Invalid parameter provided.
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Description of what's wrong with the parameter
        message: String,
    },

    /// Centroid recomputation was attempted on a cluster with no members.
    #[error("cannot compute a centroid for a cluster with no members")]
    EmptyCluster,
}

impl ClusterError {
    /// Create an InsufficientItems error.
    pub fn insufficient_items(requested: usize, actual: usize) -> Self {
        Self::InsufficientItems { requested, actual }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
