use crate::api::{KMeans, KMeansConfig};
use crate::history::{History, HistoryEntry, Termination};
use crate::point::Point;
use crate::primitive::Primitive;
use log::{debug, trace};

pub(crate) struct Lloyd<T: Primitive> {
    _p: std::marker::PhantomData<T>,
}

impl<T: Primitive> Lloyd<T> {
    /// Update step: every centroid becomes the coordinate-wise mean of its
    /// assigned points. A cluster without points keeps its previous centroid,
    /// so no division by zero can occur and the cluster identity survives.
    fn update_centroids(clusters: &[Vec<Point<T>>], previous: &[Point<T>]) -> Vec<Point<T>> {
        clusters
            .iter()
            .zip(previous.iter())
            .map(|(members, prev)| {
                if members.is_empty() {
                    *prev
                } else {
                    let count = T::from(members.len()).unwrap();
                    let (sum_x, sum_y) = members
                        .iter()
                        .fold((T::zero(), T::zero()), |(sx, sy), p| (sx + p.x, sy + p.y));
                    Point::new(sum_x / count, sum_y / count)
                }
            })
            .collect()
    }

    /// Run the assign/update loop from `centroids` until the configured
    /// convergence strategy reports a settled state, or `max_iter` cycles
    /// have been recorded.
    ///
    /// Entry 0 pairs the initial centroids with the assignment computed
    /// against them, so the first replayable frame already shows a full
    /// grouping. Each following entry is one completed assign+update cycle.
    /// The cycle that leaves every centroid unchanged is not recorded — it
    /// would duplicate the previous entry.
    pub(crate) fn calculate(
        data: &KMeans<T>,
        initial_centroids: Vec<Point<T>>,
        max_iter: usize,
        config: &KMeansConfig<'_, T>,
    ) -> History<T> {
        let mut convergence = config.convergence.create_logic();
        let mut centroids = initial_centroids;

        (config.init_done)(&centroids);

        let mut entries = Vec::new();
        entries.push(HistoryEntry {
            centroids: centroids.clone(),
            clusters: data.group_by_nearest(&centroids),
        });

        let mut termination = Termination::ReachedCap;
        for iteration in 1..=max_iter {
            let clusters = data.group_by_nearest(&centroids);
            let new_centroids = Self::update_centroids(&clusters, &centroids);

            if convergence.settled(&centroids, &new_centroids) {
                debug!("settled after {} iterations", iteration);
                termination = Termination::Converged;
                break;
            }

            let entry = HistoryEntry {
                centroids: new_centroids.clone(),
                clusters,
            };
            let cost = entry.cost();
            trace!("iteration {}: error {}", iteration, cost);
            (config.iteration_done)(&entry, iteration, cost);
            entries.push(entry);
            centroids = new_centroids;
        }
        if termination == Termination::ReachedCap {
            debug!("iteration cap of {} reached without settling", max_iter);
        }

        History::new(entries, termination)
    }
}
