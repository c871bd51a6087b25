use kmeans_replay::*;
use rand::prelude::*;

fn main() {
    env_logger::init();
    let (point_cnt, k, max_iter) = (100, 4, 300);

    // Generate some random data in the [-10, 10] x [-10, 10] viewport
    let mut rnd = rand::thread_rng();
    let points: Vec<Point<f64>> = (0..point_cnt)
        .map(|_| Point::new(rnd.gen_range(-10.0, 10.0), rnd.gen_range(-10.0, 10.0)))
        .collect();

    // Calculate kmeans, using kmean++ as initialization-method
    let kmean = KMeans::new(points);
    let history = kmean
        .kmeans_lloyd(k, max_iter, InitMethod::KMeansPlusPlus, &KMeansConfig::default())
        .unwrap();

    println!("Recorded states: {}", history.len());
    println!("Converged: {}", history.termination().converged());
    println!("Centroids: {:?}", history.last().centroids);
    println!("Error: {}", history.last().cost());
}
