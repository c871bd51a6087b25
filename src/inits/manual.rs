use crate::error::{Error, Result};
use crate::point::Point;
use crate::primitive::Primitive;

/// Manual initialization: the caller supplies the centroid set verbatim.
/// No bounding-box or distinctness constraint is enforced; only the count
/// has to match `k` exactly.
pub(crate) fn calculate<T: Primitive>(provided: &[Point<T>], k: usize) -> Result<Vec<Point<T>>> {
    if provided.len() != k {
        return Err(Error::CentroidCountMismatch {
            provided: provided.len(),
            k,
        });
    }
    Ok(provided.to_vec())
}
