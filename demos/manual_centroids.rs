use kmeans_replay::*;

fn main() {
    env_logger::init();

    let points = vec![
        Point::new(0.0f64, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 11.0),
        Point::new(11.0, 10.0),
    ];
    let k = 2;

    // Collect the initial centroids one "click" at a time, as a canvas would
    // deliver them after translating pixels into data coordinates.
    let mut picker = CentroidPicker::new();
    picker.begin(k);
    picker.click(Point::new(-5.0, -5.0));
    assert_eq!(picker.remaining(), 1);
    picker.click(Point::new(5.0, 5.0));
    let centroids = picker.centroids().unwrap().to_vec();

    let kmean = KMeans::new(points);
    let history = kmean
        .kmeans_lloyd(k, 300, InitMethod::Manual(centroids), &KMeansConfig::default())
        .unwrap();

    for (idx, entry) in history.iter().enumerate() {
        println!("frame {}: centroids {:?}", idx, entry.centroids);
    }
    println!("Error: {}", history.last().cost());
}
