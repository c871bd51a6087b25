use kmeans_replay::*;
use rand::prelude::*;

fn main() {
    env_logger::init();
    let (point_cnt, k, max_iter) = (100, 5, 300);

    // Generate some random data in the [-10, 10] x [-10, 10] viewport
    let mut rnd = rand::thread_rng();
    let points: Vec<Point<f64>> = (0..point_cnt)
        .map(|_| Point::new(rnd.gen_range(-10.0, 10.0), rnd.gen_range(-10.0, 10.0)))
        .collect();

    let conf = KMeansConfig::build()
        .init_done(&|centroids| println!("Initialization completed ({} centroids).", centroids.len()))
        .iteration_done(&|_, nr, cost| println!("Iteration {} - Error: {:.2}", nr, cost))
        .build();

    let kmean = KMeans::new(points);
    let history = kmean
        .kmeans_lloyd(k, max_iter, InitMethod::Random, &conf)
        .unwrap();

    // Walk the recorded run the way a UI's "step" button would
    let mut session = ReplaySession::new(history);
    loop {
        println!(
            "frame {}: error {:.2}",
            session.position(),
            session.current().cost()
        );
        if session.at_end() {
            break;
        }
        session.step();
    }

    println!(
        "K-Means has {}.",
        if session.history().termination().converged() {
            "converged"
        } else {
            "been cut off at the iteration cap"
        }
    );
}
