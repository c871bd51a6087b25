use crate::api::{InitMethod, KMeans, KMeansConfig};
use crate::error::Result;
use crate::point::Point;
use crate::primitive::Primitive;

pub(crate) mod farthestfirst;
pub(crate) mod kmeanplusplus;
pub(crate) mod manual;
pub(crate) mod randomsample;

/// Dispatch to the strategy selected by `method`. The caller has already
/// checked the dataset and the cluster-count range; strategy-specific
/// constraints are checked here.
pub(crate) fn initialize<T: Primitive>(
    kmean: &KMeans<T>,
    k: usize,
    method: &InitMethod<T>,
    config: &KMeansConfig<'_, T>,
) -> Result<Vec<Point<T>>> {
    match method {
        InitMethod::Random => randomsample::calculate(kmean, k, config),
        InitMethod::KMeansPlusPlus => kmeanplusplus::calculate(kmean, k, config),
        InitMethod::FarthestFirst => farthestfirst::calculate(kmean, k, config),
        InitMethod::Manual(centroids) => manual::calculate(centroids, k),
    }
}
