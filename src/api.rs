use crate::convergence::ConvergenceStrategy;
use crate::error::{Error, Result};
use crate::history::{History, HistoryEntry};
use crate::inits;
use crate::point::Point;
use crate::primitive::Primitive;
use rand::prelude::*;
use std::cell::RefCell;

/// Largest supported cluster count per run.
pub const MAX_CLUSTERS: usize = 100;

/// Iteration cap used by the wire-level entry point and the demos. Oscillating
/// or pathological inputs terminate at the cap instead of spinning forever.
pub const DEFAULT_MAX_ITER: usize = 300;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&[Point<T>]);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&HistoryEntry<T>, usize, T);

/// This is a structure holding various configuration options for a k-means
/// calculation, such as the random number generator to use, the convergence
/// strategy, or a couple of callbacks that can be set to get status
/// information from a running calculation.
///
/// For more detailed information about all possible options, have a look at
/// [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called when the centroid initialization finished
    /// ## Arguments
    /// - **centroids**: The initial centroid set
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each recorded iteration
    /// ## Arguments
    /// - **entry**: The [`HistoryEntry`] the iteration produced
    /// - **iteration_id**: Number of the current iteration (1-based)
    /// - **cost**: The entry's assignment cost
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// The convergence strategy to use for the running calculation
    pub(crate) convergence: ConvergenceStrategy<T>,
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_, _, _| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            convergence: ConvergenceStrategy::Tolerance {
                epsilon: T::from(1e-4).unwrap(),
            },
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder {
            config: KMeansConfig::default(),
        }
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>,
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization,
    /// before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done;
        self
    }
    /// Set the callback that should be called for each history entry a running
    /// k-means calculation records.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done;
        self
    }
    /// Set the random number generator that should be used in the k-means calculation.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd));
        self
    }
    /// Set the convergence strategy to use during a running k-means calculation.
    /// For more information, see documentation of [`ConvergenceStrategy`].
    /// ## Default
    /// [`ConvergenceStrategy::Tolerance`] `{ epsilon: 1e-4 }`
    pub fn convergence_strategy(mut self, convergence: ConvergenceStrategy<T>) -> Self {
        self.config.convergence = convergence;
        self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> {
        self.config
    }
}

/// Strategy used to place the initial `k` centroids.
#[derive(Debug, Clone, PartialEq)]
pub enum InitMethod<T: Primitive> {
    /// Sample `k` distinct points uniformly without replacement (a.k.a. Forgy).
    /// Fails when `k` exceeds the dataset size.
    Random,
    /// Pick the first centroid uniformly, each following one with probability
    /// proportional to the squared distance to its nearest chosen centroid.
    KMeansPlusPlus,
    /// Pick the first centroid uniformly, each following one as the point
    /// farthest from its nearest chosen centroid.
    FarthestFirst,
    /// Use the given centroids verbatim. Fails unless exactly `k` are given.
    Manual(Vec<Point<T>>),
}

/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the points you want to operate
/// on. A [`KMeans`] instance is never mutated by a calculation, so multiple
/// runs (even concurrent ones) can share it without locking.
///
/// ## Supported initialization methods
/// - Random-Sample ([`InitMethod::Random`])
/// - K-Means++ ([`InitMethod::KMeansPlusPlus`])
/// - Farthest-First ([`InitMethod::FarthestFirst`])
/// - Caller-supplied centroids ([`InitMethod::Manual`])
pub struct KMeans<T: Primitive> {
    pub(crate) points: Vec<Point<T>>,
}

impl<T: Primitive> KMeans<T> {
    /// Create a new instance of the [`KMeans`] structure, taking ownership of
    /// the dataset. The dataset is read-only for the lifetime of the instance.
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// The dataset this instance operates on.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    fn validate(&self, k: usize) -> Result<()> {
        if self.points.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if k < 1 || k > MAX_CLUSTERS {
            return Err(Error::ClusterCountOutOfRange {
                requested: k,
                max: MAX_CLUSTERS,
            });
        }
        Ok(())
    }

    /// Produce the initial centroid set for a run, without iterating.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to initialize
    /// - **method**: Initialization strategy to use
    /// - **config**: [`KMeansConfig`] instance; randomized strategies draw from
    ///   its random number generator
    pub fn initialize(
        &self,
        k: usize,
        method: &InitMethod<T>,
        config: &KMeansConfig<'_, T>,
    ) -> Result<Vec<Point<T>>> {
        self.validate(k)?;
        inits::initialize(self, k, method, config)
    }

    /// Full k-means (Lloyd) calculation, recording every iteration.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for
    /// - **max_iter**: Hard cap on the amount of iterations; exhausting it is
    ///   reported as [`Termination::ReachedCap`](crate::Termination) on the result
    /// - **method**: Initialization strategy for the `k` starting centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration
    ///   options for the calculation
    ///
    /// ## Returns
    /// The complete [`History`] of the run: entry 0 is the initial centroids
    /// paired with the assignment computed against them, the last entry is the
    /// converged (or capped) state.
    ///
    /// ## Example
    /// ```rust
    /// use kmeans_replay::*;
    ///
    /// let points = vec![
    ///     Point::new(0.0f64, 0.0),
    ///     Point::new(0.0, 1.0),
    ///     Point::new(10.0, 10.0),
    ///     Point::new(10.0, 11.0),
    /// ];
    ///
    /// let kmean = KMeans::new(points);
    /// let history = kmean
    ///     .kmeans_lloyd(2, 300, InitMethod::KMeansPlusPlus, &KMeansConfig::default())
    ///     .unwrap();
    ///
    /// println!("Recorded states: {}", history.len());
    /// println!("Final centroids: {:?}", history.last().centroids);
    /// println!("Error: {}", history.last().cost());
    /// ```
    pub fn kmeans_lloyd(
        &self,
        k: usize,
        max_iter: usize,
        method: InitMethod<T>,
        config: &KMeansConfig<'_, T>,
    ) -> Result<History<T>> {
        self.validate(k)?;
        let centroids = inits::initialize(self, k, &method, config)?;
        Ok(crate::variants::Lloyd::calculate(self, centroids, max_iter, config))
    }

    /// Index and squared distance of the centroid nearest to `point`.
    /// Exact ties break to the lowest centroid index, so assignment is
    /// deterministic given a centroid set.
    pub(crate) fn nearest_centroid(point: &Point<T>, centroids: &[Point<T>]) -> (usize, T) {
        centroids
            .iter()
            .enumerate()
            .map(|(idx, c)| (idx, point.squared_distance(c)))
            .min_by(|(i0, d0), (i1, d1)| d0.partial_cmp(d1).unwrap().then(i0.cmp(i1)))
            .unwrap()
    }

    /// Assignment step: group every point under its nearest centroid. The
    /// returned grouping is parallel to `centroids`; empty clusters stay as
    /// empty lists.
    pub(crate) fn group_by_nearest(&self, centroids: &[Point<T>]) -> Vec<Vec<Point<T>>> {
        let mut clusters = vec![Vec::new(); centroids.len()];
        for point in self.points.iter() {
            let (idx, _) = Self::nearest_centroid(point, centroids);
            clusters[idx].push(*point);
        }
        clusters
    }
}
