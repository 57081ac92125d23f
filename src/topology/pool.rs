use super::vertex::VertexId;

/// Vertices not currently on the boundary, in input order.
///
/// The pool only ever shrinks during refinement: a vertex taken onto the
/// boundary is never returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    members: Vec<VertexId>,
}

impl CandidatePool {
    /// Creates a pool from vertex IDs, keeping their order.
    #[must_use]
    pub fn new(members: Vec<VertexId>) -> Self {
        Self { members }
    }

    /// Removes a vertex by identity. Returns `false` if it was not pooled.
    pub fn take(&mut self, vertex: VertexId) -> bool {
        match self.members.iter().position(|&m| m == vertex) {
            Some(pos) => {
                self.members.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `vertex` is in the pool.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.contains(&vertex)
    }

    /// Pooled vertex IDs in input order.
    #[must_use]
    pub fn ids(&self) -> &[VertexId] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
