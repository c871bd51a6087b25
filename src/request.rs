use crate::api::{InitMethod, KMeans, KMeansConfig, DEFAULT_MAX_ITER, MAX_CLUSTERS};
use crate::error::{Error, Result};
use crate::history::History;
use crate::point::Point;
use crate::primitive::Primitive;
use log::info;
use serde::{Deserialize, Serialize};

/// Wire spelling of the initialization strategies. The long-form spellings
/// used by older clients are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodName {
    Random,
    #[serde(alias = "KMeans++")]
    KMeansPlusPlus,
    #[serde(alias = "Farthest First")]
    FarthestFirst,
    Manual,
}

/// One clustering request, as received from a presentation client.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Primitive"))]
pub struct ClusterRequest<T: Primitive> {
    /// The dataset, an ordered sequence of `[x, y]` pairs.
    pub data: Vec<Point<T>>,
    /// Requested cluster count, valid range 1..=100.
    pub k: usize,
    /// Strategy for placing the initial centroids.
    pub initialization_method: MethodName,
    /// Required (with exactly `k` entries) for `Manual`; ignored otherwise.
    #[serde(default)]
    pub initial_centroids: Option<Vec<Point<T>>>,
}

impl<T: Primitive> ClusterRequest<T> {
    /// The effective cluster count, clamped the way the interactive client
    /// validates its form input: at most 100, and under `Random` at most the
    /// dataset size. Values below 1 are not clamped but rejected by
    /// [`cluster`].
    pub fn effective_k(&self) -> usize {
        let mut k = self.k.min(MAX_CLUSTERS);
        if self.initialization_method == MethodName::Random {
            k = k.min(self.data.len());
        }
        k
    }

    fn init_method(&self, k: usize) -> Result<InitMethod<T>> {
        match self.initialization_method {
            MethodName::Random => Ok(InitMethod::Random),
            MethodName::KMeansPlusPlus => Ok(InitMethod::KMeansPlusPlus),
            MethodName::FarthestFirst => Ok(InitMethod::FarthestFirst),
            MethodName::Manual => match &self.initial_centroids {
                Some(centroids) => Ok(InitMethod::Manual(centroids.clone())),
                None => Err(Error::CentroidCountMismatch { provided: 0, k }),
            },
        }
    }
}

/// Successful response to a [`ClusterRequest`]: the full run history, plus a
/// flag telling apart true convergence from an iteration-cap cutoff.
#[derive(Debug, Serialize)]
pub struct ClusterResponse<T: Primitive> {
    pub history: History<T>,
    pub converged: bool,
}

/// Serve one clustering request.
///
/// The whole history is computed up front; stepping through it afterwards is
/// the client's business and triggers no further computation. On failure the
/// [`Error`]'s display rendering is the human-readable message for the
/// client's error payload.
pub fn cluster<T: Primitive>(
    request: &ClusterRequest<T>,
    config: &KMeansConfig<'_, T>,
) -> Result<ClusterResponse<T>> {
    if request.k < 1 {
        return Err(Error::ClusterCountOutOfRange {
            requested: request.k,
            max: MAX_CLUSTERS,
        });
    }
    let k = request.effective_k();
    info!(
        "clustering {} points into {} clusters ({:?} initialization)",
        request.data.len(),
        k,
        request.initialization_method
    );

    let method = request.init_method(k)?;
    let kmean = KMeans::new(request.data.clone());
    let history = kmean.kmeans_lloyd(k, DEFAULT_MAX_ITER, method, config)?;
    let converged = history.termination().converged();
    Ok(ClusterResponse { history, converged })
}
