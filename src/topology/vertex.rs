use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the hull store.
    pub struct VertexId;
}

/// Data associated with an input vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexData {
    /// Caller-supplied identifier, unique within one computation.
    ///
    /// Identity is decided by this label (or by [`VertexId`]), never by
    /// position: distinct vertices may coincide.
    pub label: u64,
    /// The 2D position of the vertex.
    pub point: Point2,
}

impl VertexData {
    /// Creates a new vertex with the given label and position.
    #[must_use]
    pub fn new(label: u64, point: Point2) -> Self {
        Self { label, point }
    }

    /// Creates a new vertex from raw coordinates.
    #[must_use]
    pub fn at(label: u64, x: f64, y: f64) -> Self {
        Self::new(label, Point2::new(x, y))
    }
}

/// Removes vertices whose position exactly repeats an earlier vertex,
/// keeping the first occurrence and the original order.
///
/// Hull computations require positionally distinct input; this is the
/// filtering a caller is expected to apply beforehand.
#[must_use]
pub fn dedup_positions(vertices: &[VertexData]) -> Vec<VertexData> {
    let mut kept: Vec<VertexData> = Vec::with_capacity(vertices.len());
    for v in vertices {
        if !kept.iter().any(|k| k.point == v.point) {
            kept.push(*v);
        }
    }
    kept
}
