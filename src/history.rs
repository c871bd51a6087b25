use crate::error::{Error, Result};
use crate::point::Point;
use crate::primitive::Primitive;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// One observable iteration state: the centroid set after the update step,
/// paired with the cluster grouping that produced it.
///
/// The centroid index is the cluster identity and is stable across the whole
/// run: `centroids[j]` and `clusters[j]` describe the same logical cluster in
/// every entry. On the wire, an entry is the 2-tuple `[centroids, clusters]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<T: Primitive> {
    /// Cluster centers, exactly `k` of them.
    pub centroids: Vec<Point<T>>,
    /// Points per cluster, parallel to `centroids`. Every dataset point
    /// appears in exactly one of the inner lists.
    pub clusters: Vec<Vec<Point<T>>>,
}

impl<T: Primitive> HistoryEntry<T> {
    /// Number of clusters in this entry.
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Assignment cost of this entry: the sum of squared distances from every
    /// point to its cluster's centroid. Non-increasing from entry to entry.
    pub fn cost(&self) -> T {
        self.clusters
            .iter()
            .zip(self.centroids.iter())
            .map(|(members, centroid)| {
                members
                    .iter()
                    .map(|p| p.squared_distance(centroid))
                    .sum::<T>()
            })
            .sum()
    }
}

impl<T: Primitive> Serialize for HistoryEntry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (&self.centroids, &self.clusters).serialize(serializer)
    }
}

impl<'de, T: Primitive> Deserialize<'de> for HistoryEntry<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let (centroids, clusters) = <(Vec<Point<T>>, Vec<Vec<Point<T>>>)>::deserialize(deserializer)?;
        Ok(HistoryEntry { centroids, clusters })
    }
}

/// How a recorded run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The update step left every centroid unchanged.
    Converged,
    /// The iteration cap was exhausted before the centroids settled. Still a
    /// successful result; the caller decides whether to warn about it.
    ReachedCap,
}

impl Termination {
    pub fn converged(self) -> bool {
        matches!(self, Termination::Converged)
    }
}

/// The full, ordered record of a clustering run.
///
/// Entry 0 is the state after the first assignment against the initial
/// centroids; the last entry is the converged (or capped) state. A history
/// always contains at least one entry and is never mutated once produced:
/// stepping and jumping are pure reads over it.
///
/// Serializes as the plain sequence of its entries.
#[derive(Debug, Clone, PartialEq)]
pub struct History<T: Primitive> {
    entries: Vec<HistoryEntry<T>>,
    termination: Termination,
}

impl<T: Primitive> History<T> {
    pub(crate) fn new(entries: Vec<HistoryEntry<T>>, termination: Termination) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries, termination }
    }

    /// Number of recorded iteration states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, or [`Error::OutOfRange`] outside `[0, len - 1]`.
    pub fn at(&self, index: usize) -> Result<&HistoryEntry<T>> {
        self.entries.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Whether `index` addresses the final (converged or capped) entry.
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.entries.len()
    }

    /// The final entry.
    pub fn last(&self) -> &HistoryEntry<T> {
        &self.entries[self.entries.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry<T>> {
        self.entries.iter()
    }

    /// Whether the run converged or was cut off at the iteration cap.
    pub fn termination(&self) -> Termination {
        self.termination
    }
}

impl<T: Primitive> Serialize for History<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> History<f64> {
        let entry0 = HistoryEntry {
            centroids: vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
            clusters: vec![
                vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)],
                vec![Point::new(10.0, 10.0), Point::new(10.0, 11.0)],
            ],
        };
        let entry1 = HistoryEntry {
            centroids: vec![Point::new(0.0, 0.5), Point::new(10.0, 10.5)],
            clusters: entry0.clusters.clone(),
        };
        History::new(vec![entry0, entry1], Termination::Converged)
    }

    #[test]
    fn indexed_access() {
        let history = sample_history();
        assert_eq!(history.len(), 2);
        assert!(!history.is_empty());
        assert_eq!(history.at(0).unwrap().centroids[1], Point::new(10.0, 10.0));
        assert_eq!(history.at(1).unwrap(), history.last());
        assert!(matches!(
            history.at(2),
            Err(Error::OutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn is_last_only_at_the_final_entry() {
        let history = sample_history();
        assert!(!history.is_last(0));
        assert!(history.is_last(1));
        assert!(!history.is_last(2));
    }

    #[test]
    fn cost_is_the_sum_of_squared_distances() {
        let history = sample_history();
        // Entry 0: each cluster holds its centroid (0) plus a point one unit away
        assert_eq!(history.at(0).unwrap().cost(), 2.0);
        // Entry 1: all four points sit half a unit from their centroid
        assert_eq!(history.at(1).unwrap().cost(), 1.0);
    }

    #[test]
    fn entry_wire_format_is_a_centroids_clusters_pair() {
        let entry = HistoryEntry {
            centroids: vec![Point::new(1.0f64, 2.0)],
            clusters: vec![vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]],
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!([[[1.0, 2.0]], [[[1.0, 2.0], [3.0, 4.0]]]])
        );

        let back: HistoryEntry<f64> = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn history_serializes_as_its_entries() {
        let history = sample_history();
        let json = serde_json::to_value(&history).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1][0], serde_json::json!([[0.0, 0.5], [10.0, 10.5]]));
    }
}
