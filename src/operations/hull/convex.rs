use slotmap::SecondaryMap;

use crate::error::Result;
use crate::math::convex_hull_2d::convex_hull_2d;
use crate::math::Point2;
use crate::topology::{Boundary, CandidatePool, EdgeData, HullStore, VertexId};

/// Builds the convex boundary of a vertex set and the pool of vertices
/// left inside it.
///
/// Hull vertices `v0..vn-1` (counter-clockwise) become the edges
/// `(v0, v1) .. (vn-2, vn-1)` followed by the closing edge `(v0, vn-1)`.
#[derive(Debug)]
pub struct ConvexBoundary {
    vertices: Vec<VertexId>,
}

impl ConvexBoundary {
    /// Creates a new `ConvexBoundary` operation over the given vertices.
    #[must_use]
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// Executes the operation, adding the boundary edges to the store.
    ///
    /// The returned pool keeps the input order of the vertices not on the
    /// boundary.
    ///
    /// # Errors
    ///
    /// - `OperationError::InsufficientInput` if fewer than 3 distinct positions are given
    /// - `GeometryError::Collinear` if every vertex lies on one line
    /// - `TopologyError::EntityNotFound` if a vertex is not in the store
    pub fn execute(&self, store: &mut HullStore) -> Result<(Boundary, CandidatePool)> {
        let points = self
            .vertices
            .iter()
            .map(|&id| store.point(id))
            .collect::<std::result::Result<Vec<Point2>, _>>()?;
        let order: Vec<VertexId> = convex_hull_2d(&points)?
            .into_iter()
            .map(|i| self.vertices[i])
            .collect();

        let mut edges = Vec::with_capacity(order.len());
        for pair in order.windows(2) {
            edges.push(store.add_edge(EdgeData::new(pair[0], pair[1])));
        }
        edges.push(store.add_edge(EdgeData::new(order[0], order[order.len() - 1])));

        let mut on_hull: SecondaryMap<VertexId, ()> = SecondaryMap::new();
        for &v in &order {
            on_hull.insert(v, ());
        }
        let pool = self
            .vertices
            .iter()
            .copied()
            .filter(|&v| !on_hull.contains_key(v))
            .collect();

        Ok((Boundary::new(edges), CandidatePool::new(pool)))
    }
}
