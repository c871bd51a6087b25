use crate::api::{KMeans, KMeansConfig};
use crate::error::Result;
use crate::point::Point;
use crate::primitive::Primitive;
use rand::prelude::*;

/// Farthest-First initialization.
///
/// Selects one point uniformly as first centroid; every following centroid is
/// the point with the largest distance to its nearest already-chosen centroid.
/// Deterministic once the first centroid is drawn.
pub(crate) fn calculate<T: Primitive>(
    kmean: &KMeans<T>,
    k: usize,
    config: &KMeansConfig<'_, T>,
) -> Result<Vec<Point<T>>> {
    let points = &kmean.points;
    let mut rnd = config.rnd.borrow_mut();

    let mut centroids = Vec::with_capacity(k);
    let first_idx = rnd.gen_range(0, points.len());
    centroids.push(points[first_idx]);

    while centroids.len() < k {
        let (farthest_idx, _) = points
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                let nearest = centroids
                    .iter()
                    .map(|c| p.squared_distance(c))
                    .min_by(|d0, d1| d0.partial_cmp(d1).unwrap())
                    .unwrap();
                (idx, nearest)
            })
            .max_by(|(_, d0), (_, d1)| d0.partial_cmp(d1).unwrap())
            .unwrap();
        centroids.push(points[farthest_idx]);
    }
    Ok(centroids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InitMethod;

    #[test]
    fn spreads_centroids_to_the_extremes() {
        // A tight blob plus two far-out points: whatever the first draw is,
        // the far-out points must be covered before a second blob member.
        let points = vec![
            Point::new(0.0f64, 0.0),
            Point::new(0.1, 0.0),
            Point::new(0.0, 0.1),
            Point::new(100.0, 100.0),
            Point::new(-100.0, 100.0),
        ];
        let kmean = KMeans::new(points);
        let rnd = StdRng::seed_from_u64(2);
        let conf = KMeansConfig::build().random_generator(rnd).build();

        let centroids = kmean.initialize(3, &InitMethod::FarthestFirst, &conf).unwrap();
        assert!(centroids.contains(&Point::new(100.0, 100.0)));
        assert!(centroids.contains(&Point::new(-100.0, 100.0)));
    }

    #[test]
    fn later_choices_are_deterministic_given_the_first() {
        let points = vec![
            Point::new(0.0f64, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ];
        let kmean = KMeans::new(points.clone());
        // Whichever point is drawn first, choosing all three must recover the
        // whole dataset without duplicates.
        for seed in 0..5 {
            let conf = KMeansConfig::build()
                .random_generator(StdRng::seed_from_u64(seed))
                .build();
            let mut centroids = kmean
                .initialize(3, &InitMethod::FarthestFirst, &conf)
                .unwrap();
            centroids.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap().then(a.y.partial_cmp(&b.y).unwrap()));
            let mut expected = points.clone();
            expected.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap().then(a.y.partial_cmp(&b.y).unwrap()));
            assert_eq!(centroids, expected);
        }
    }
}
