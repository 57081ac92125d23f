pub mod boundary;
pub mod edge;
pub mod pool;
pub mod vertex;

pub use boundary::Boundary;
pub use edge::{EdgeData, EdgeId};
pub use pool::CandidatePool;
pub use vertex::{dedup_positions, VertexData, VertexId};

use crate::error::TopologyError;
use crate::math::Point2;
use slotmap::SlotMap;

/// Central arena that owns all vertices and edges of one hull computation.
///
/// Boundaries and candidate pools reference entities via typed IDs
/// (generational indices), so removing an edge never invalidates the
/// handles of the others.
#[derive(Debug, Default)]
pub struct HullStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
}

impl HullStore {
    /// Creates a new, empty hull store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns the position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn point(&self, id: VertexId) -> Result<Point2, TopologyError> {
        self.vertex(id).map(|v| v.point)
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Removes an edge from the store, returning its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<EdgeData, TopologyError> {
        self.edges
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Drops every edge, keeping the vertices.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Returns the endpoint positions of an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or one of its vertices is not found.
    pub fn edge_points(&self, id: EdgeId) -> Result<(Point2, Point2), TopologyError> {
        let edge = self.edge(id)?;
        Ok((self.point(edge.start)?, self.point(edge.end)?))
    }

    /// Returns the Euclidean length of an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or one of its vertices is not found.
    pub fn edge_length(&self, id: EdgeId) -> Result<f64, TopologyError> {
        let (a, b) = self.edge_points(id)?;
        Ok(nalgebra::distance(&a, &b))
    }
}
