use crate::primitive::Primitive;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A sample (or centroid) position in the two-dimensional plane.
///
/// A point's identity is its position in the input sequence; the coordinates
/// themselves carry no identity. On the wire, a point is the pair `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T: Primitive> {
    pub x: T,
    pub y: T,
}

impl<T: Primitive> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to `other`.
    ///
    /// All nearest-centroid decisions are made on squared distances; the
    /// square root is monotone and therefore never needed.
    pub fn squared_distance(&self, other: &Point<T>) -> T {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }
}

impl<T: Primitive> Serialize for Point<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de, T: Primitive> Deserialize<'de> for Point<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Point { x, y })
    }
}
