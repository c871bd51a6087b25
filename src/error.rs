use thiserror::Error;

/// Errors returned by clustering operations in this crate.
///
/// Iteration-cap exhaustion is not an error; it is reported as
/// [`Termination::ReachedCap`](crate::Termination) on a successful history.
#[derive(Debug, Error)]
pub enum Error {
    /// Clustering was requested over zero points.
    #[error("cannot cluster an empty dataset")]
    EmptyDataset,

    /// Requested cluster count lies outside the supported range.
    #[error("invalid cluster count: requested {requested}, valid range is 1..={max}")]
    ClusterCountOutOfRange {
        /// Requested number of clusters.
        requested: usize,
        /// Largest supported cluster count.
        max: usize,
    },

    /// Requested cluster count is incompatible with the dataset size.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_points} points")]
    ClusterCountExceedsDataset {
        /// Requested number of clusters.
        requested: usize,
        /// Number of points in the dataset.
        n_points: usize,
    },

    /// Manual initialization was given a centroid set of the wrong size.
    #[error("manual initialization requires exactly {k} centroids, but {provided} were provided")]
    CentroidCountMismatch {
        /// Number of centroids supplied by the caller.
        provided: usize,
        /// Requested number of clusters.
        k: usize,
    },

    /// A history was indexed outside `[0, len - 1]`.
    #[error("history index {index} out of range for {len} entries")]
    OutOfRange {
        /// Requested entry index.
        index: usize,
        /// Number of entries in the history.
        len: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
