use crate::api::{KMeans, KMeansConfig};
use crate::error::Result;
use crate::point::Point;
use crate::primitive::Primitive;
use rand::distributions::weighted::WeightedIndex;
use rand::prelude::*;
use std::ops::DerefMut;

/// K-Means++ initialization.
///
/// Starts by selecting one point as first centroid. Proceeding from there,
/// iteratively selects one new centroid (per iteration) by calculating each
/// point's probability of "being a centroid": proportional to its squared
/// distance to the nearest already-chosen centroid. This leads to a tendency
/// of selecting centroids that are far away from the already covered regions.
///
/// Points coincident with a chosen centroid get zero weight. When every point
/// has zero weight, the draw falls back to a uniform choice, so the requested
/// amount of centroids is always produced.
pub(crate) fn calculate<T: Primitive>(
    kmean: &KMeans<T>,
    k: usize,
    config: &KMeansConfig<'_, T>,
) -> Result<Vec<Point<T>>> {
    let points = &kmean.points;
    let mut rnd = config.rnd.borrow_mut();

    let mut centroids = Vec::with_capacity(k);
    // Randomly select first centroid
    let first_idx = rnd.gen_range(0, points.len());
    centroids.push(points[first_idx]);

    while centroids.len() < k {
        // For each following centroid: squared distance of every point to its
        // nearest already-chosen centroid
        let weights: Vec<T> = points
            .iter()
            .map(|p| {
                centroids
                    .iter()
                    .map(|c| p.squared_distance(c))
                    .min_by(|d0, d1| d0.partial_cmp(d1).unwrap())
                    .unwrap()
            })
            .collect();
        let distsum: T = weights.iter().cloned().sum();

        let sampled_centroid_id = if distsum > T::zero() {
            // Calculate probabilities for each of the points, to be the new centroid
            let centroid_probabilities: Vec<T> =
                weights.iter().cloned().map(|d| d / distsum).collect();
            // Use rand's WeightedIndex to randomly draw a centroid, while respecting their probabilities
            let centroid_index = WeightedIndex::new(centroid_probabilities).unwrap();
            centroid_index.sample(rnd.deref_mut())
        } else {
            // Every point coincides with a chosen centroid
            rnd.gen_range(0, points.len())
        };
        centroids.push(points[sampled_centroid_id]);
    }
    Ok(centroids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InitMethod;

    #[test]
    fn produces_k_centroids_from_the_dataset() {
        let points = vec![
            Point::new(0.0f64, 0.0),
            Point::new(0.0, 1.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 11.0),
            Point::new(-10.0, 5.0),
        ];
        let kmean = KMeans::new(points.clone());
        let rnd = StdRng::seed_from_u64(11);
        let conf = KMeansConfig::build().random_generator(rnd).build();

        let centroids = kmean.initialize(3, &InitMethod::KMeansPlusPlus, &conf).unwrap();
        assert_eq!(centroids.len(), 3);
        for c in &centroids {
            assert!(points.contains(c));
        }
    }

    #[test]
    fn identical_points_still_yield_k_centroids() {
        let repeated = Point::new(2.5f64, -2.5);
        let kmean = KMeans::new(vec![repeated; 6]);
        let rnd = StdRng::seed_from_u64(5);
        let conf = KMeansConfig::build().random_generator(rnd).build();

        let centroids = kmean.initialize(3, &InitMethod::KMeansPlusPlus, &conf).unwrap();
        assert_eq!(centroids, vec![repeated; 3]);
    }

    #[test]
    fn seeded_generator_makes_the_draw_repeatable() {
        let points: Vec<Point<f64>> = (0..30)
            .map(|i| Point::new((i % 7) as f64, (i % 5) as f64))
            .collect();
        let kmean = KMeans::new(points);
        let draw = |seed: u64| {
            let conf = KMeansConfig::build()
                .random_generator(StdRng::seed_from_u64(seed))
                .build();
            kmean
                .initialize(4, &InitMethod::KMeansPlusPlus, &conf)
                .unwrap()
        };
        assert_eq!(draw(1337), draw(1337));
    }
}
