//! # kmeans-replay - API documentation
//!
//! kmeans-replay is a small rust library for k-means clustering where the
//! point of interest is not just the final partition, but the road towards
//! it: every Lloyd iteration is recorded into an ordered, immutable
//! [`History`] that can be stepped through frame by frame or jumped to its
//! final state.
//!
//! ## Design target
//! The crate targets interactive exploration of bounded, two-dimensional
//! datasets. A whole run is computed up front as one synchronous, pure
//! calculation; "step" and "run" afterwards are plain reads over the
//! recorded history and never recompute anything. Rendering, colors and
//! input wiring are deliberately out of scope - a presentation layer
//! consumes the history purely as data.
//!
//! ## Supported centroid initializations
//! The outcome of each k-means run depends on the initialization of its
//! clusters. The implemented methods are listed in [`InitMethod`]: random
//! sampling, K-Means++, farthest-first, and manually placed centroids
//! (collected, if desired, through the [`CentroidPicker`] state machine).
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use kmeans_replay::*;
//!
//! // Generate some random data in the [-10, 10] x [-10, 10] viewport
//! let points: Vec<Point<f64>> = (0..100)
//!     .map(|_| {
//!         Point::new(
//!             rand::random::<f64>() * 20.0 - 10.0,
//!             rand::random::<f64>() * 20.0 - 10.0,
//!         )
//!     })
//!     .collect();
//!
//! // Calculate kmeans, using kmean++ as initialization-method
//! let kmean = KMeans::new(points);
//! let history = kmean
//!     .kmeans_lloyd(4, 300, InitMethod::KMeansPlusPlus, &KMeansConfig::default())
//!     .unwrap();
//!
//! println!("Recorded states: {}", history.len());
//! println!("Centroids: {:?}", history.last().centroids);
//! println!("Error: {}", history.last().cost());
//! ```
//!
//! ## Example (replaying a run step by step)
//! ```rust
//! use kmeans_replay::*;
//!
//! let points = vec![
//!     Point::new(0.0f64, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 11.0),
//! ];
//!
//! let kmean = KMeans::new(points);
//! let history = kmean
//!     .kmeans_lloyd(2, 300, InitMethod::KMeansPlusPlus, &KMeansConfig::default())
//!     .unwrap();
//!
//! let mut session = ReplaySession::new(history);
//! while !session.at_end() {
//!     let entry = session.step();
//!     println!("error: {}", entry.cost());
//! }
//! assert!(session.at_end());
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct, which takes over the
//! dataset into its ownership. Calling [`KMeans::kmeans_lloyd`] on it does
//! not mutate it, so multiple runs can be done in parallel over the same
//! instance. Each run is configured through a [`KMeansConfig`] (random
//! number generator, convergence strategy, status callbacks); pass a seeded
//! generator to make the whole history deterministically repeatable.
//!
//! A run either fails fast with an [`Error`] describing the violated
//! configuration constraint, or yields a complete [`History`]. The history
//! records whether the run truly converged or was cut off at the iteration
//! cap ([`Termination`]); no partial histories exist.
//!
//! For clients speaking the serialized wire format, [`cluster`] accepts a
//! [`ClusterRequest`] and answers with the history serialized as
//! `[centroids, clusters]` pairs.

#[macro_use]
mod helpers;
mod api;
mod convergence;
mod error;
mod history;
mod inits;
mod point;
mod primitive;
mod request;
mod session;
mod variants;

pub use api::{
    InitDoneCallbackFn, InitMethod, IterationDoneCallbackFn, KMeans, KMeansConfig,
    KMeansConfigBuilder, DEFAULT_MAX_ITER, MAX_CLUSTERS,
};
pub use convergence::ConvergenceStrategy;
pub use error::{Error, Result};
pub use history::{History, HistoryEntry, Termination};
pub use point::Point;
pub use primitive::Primitive;
pub use request::{cluster, ClusterRequest, ClusterResponse, MethodName};
pub use session::{CentroidPicker, PickerState, ReplaySession};
