use crate::api::{KMeans, KMeansConfig};
use crate::error::{Error, Result};
use crate::point::Point;
use crate::primitive::Primitive;
use rand::prelude::*;
use std::ops::DerefMut;

/// Random sample initialization (a.k.a. Forgy): select `k` distinct points
/// from the dataset as initial centroids.
pub(crate) fn calculate<T: Primitive>(
    kmean: &KMeans<T>,
    k: usize,
    config: &KMeansConfig<'_, T>,
) -> Result<Vec<Point<T>>> {
    if k > kmean.points.len() {
        return Err(Error::ClusterCountExceedsDataset {
            requested: k,
            n_points: kmean.points.len(),
        });
    }
    Ok(kmean
        .points
        .choose_multiple(config.rnd.borrow_mut().deref_mut(), k)
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InitMethod;

    fn line_points(n: usize) -> Vec<Point<f64>> {
        (0..n).map(|i| Point::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn fails_when_k_exceeds_the_dataset() {
        let kmean = KMeans::new(line_points(3));
        let result = kmean.initialize(4, &InitMethod::Random, &KMeansConfig::default());
        assert!(matches!(
            result,
            Err(Error::ClusterCountExceedsDataset { requested: 4, n_points: 3 })
        ));
    }

    #[test]
    fn k_equal_to_dataset_size_selects_every_point() {
        let points = line_points(5);
        let kmean = KMeans::new(points.clone());
        let rnd = StdRng::seed_from_u64(3);
        let conf = KMeansConfig::build().random_generator(rnd).build();

        let mut centroids = kmean.initialize(5, &InitMethod::Random, &conf).unwrap();
        centroids.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
        assert_eq!(centroids, points);
    }

    #[test]
    fn centroids_are_distinct_dataset_members() {
        let points = line_points(20);
        let kmean = KMeans::new(points.clone());
        let rnd = StdRng::seed_from_u64(7);
        let conf = KMeansConfig::build().random_generator(rnd).build();

        let centroids = kmean.initialize(4, &InitMethod::Random, &conf).unwrap();
        assert_eq!(centroids.len(), 4);
        for c in &centroids {
            assert!(points.contains(c));
        }
        for (i, a) in centroids.iter().enumerate() {
            for b in centroids.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn seeded_generator_makes_the_draw_repeatable() {
        let kmean = KMeans::new(line_points(50));
        let draw = |seed: u64| {
            let conf = KMeansConfig::build()
                .random_generator(StdRng::seed_from_u64(seed))
                .build();
            kmean.initialize(5, &InitMethod::Random, &conf).unwrap()
        };
        assert_eq!(draw(42), draw(42));
    }
}
