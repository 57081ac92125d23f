use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the hull store.
    pub struct EdgeId;
}

/// Data associated with a boundary edge.
///
/// An edge references two vertices by ID; it does not own them. The pair
/// is unordered for boundary purposes, `start`/`end` only record the order
/// in which the edge was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeData {
    /// First endpoint.
    pub start: VertexId,
    /// Second endpoint.
    pub end: VertexId,
}

impl EdgeData {
    /// Creates a new edge between two vertices.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    pub fn has_endpoint(&self, vertex: VertexId) -> bool {
        self.start == vertex || self.end == vertex
    }

    /// Returns `true` if this edge and the segment `(a, b)` share an endpoint.
    #[must_use]
    pub fn shares_endpoint(&self, a: VertexId, b: VertexId) -> bool {
        self.has_endpoint(a) || self.has_endpoint(b)
    }

    /// Returns the endpoint opposite to `vertex`, if `vertex` is an endpoint.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.start == vertex {
            Some(self.end)
        } else if self.end == vertex {
            Some(self.start)
        } else {
            None
        }
    }
}
