use slotmap::SecondaryMap;

use super::edge::{EdgeData, EdgeId};
use super::vertex::VertexId;
use super::HullStore;
use crate::error::TopologyError;

/// A polygon boundary: an ordered list of edge handles into a [`HullStore`].
///
/// The order carries no geometric meaning. It decides which edge the
/// refiner examines first, and among edges of equal length it records
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boundary {
    edges: Vec<EdgeId>,
}

impl Boundary {
    /// Creates a boundary from edge IDs, keeping their order.
    #[must_use]
    pub fn new(edges: Vec<EdgeId>) -> Self {
        Self { edges }
    }

    /// Edge IDs in current order.
    #[must_use]
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Copies every edge into fresh store entries, so the copy can be
    /// mutated without touching this boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge is not found in the store.
    pub fn duplicate(&self, store: &mut HullStore) -> Result<Self, TopologyError> {
        let mut edges = Vec::with_capacity(self.edges.len());
        for &id in &self.edges {
            let data = *store.edge(id)?;
            edges.push(store.add_edge(data));
        }
        Ok(Self { edges })
    }

    /// Replaces `edge` by the dent `(start, vertex)` + `(vertex, end)`.
    ///
    /// The original edge is removed from both the boundary and the store,
    /// the two new edges are appended at the end. Returns the new edge IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if `edge` is not part of this boundary.
    pub fn divide(
        &mut self,
        store: &mut HullStore,
        edge: EdgeId,
        vertex: VertexId,
    ) -> Result<[EdgeId; 2], TopologyError> {
        let pos = self
            .edges
            .iter()
            .position(|&e| e == edge)
            .ok_or_else(|| TopologyError::EntityNotFound("boundary edge".into()))?;
        let old = store.remove_edge(edge)?;
        self.edges.remove(pos);

        let first = store.add_edge(EdgeData::new(old.start, vertex));
        let second = store.add_edge(EdgeData::new(vertex, old.end));
        self.edges.push(first);
        self.edges.push(second);
        Ok([first, second])
    }

    /// Stable sort by descending edge length; equal lengths keep their
    /// relative order.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge is not found in the store.
    pub fn sort_by_length_desc(&mut self, store: &HullStore) -> Result<(), TopologyError> {
        let mut keyed = self
            .edges
            .iter()
            .map(|&id| store.edge_length(id).map(|len| (len, id)))
            .collect::<Result<Vec<_>, _>>()?;
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        self.edges = keyed.into_iter().map(|(_, id)| id).collect();
        Ok(())
    }

    /// Distinct vertices referenced by the boundary, in order of first use.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge is not found in the store.
    pub fn vertices(&self, store: &HullStore) -> Result<Vec<VertexId>, TopologyError> {
        let mut seen: SecondaryMap<VertexId, ()> = SecondaryMap::new();
        let mut out = Vec::new();
        for &id in &self.edges {
            let edge = store.edge(id)?;
            for v in [edge.start, edge.end] {
                if seen.insert(v, ()).is_none() {
                    out.push(v);
                }
            }
        }
        Ok(out)
    }

    /// Traverses the boundary through shared endpoints and returns its
    /// vertices as one closed loop (first vertex not repeated).
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` if the boundary is empty,
    /// a vertex is not touched by exactly two edges, or the edges form more
    /// than one cycle.
    pub fn ring(&self, store: &HullStore) -> Result<Vec<VertexId>, TopologyError> {
        let Some(&first) = self.edges.first() else {
            return Err(TopologyError::InvalidTopology("empty boundary".into()));
        };

        let mut incident: SecondaryMap<VertexId, Vec<EdgeId>> = SecondaryMap::new();
        for &id in &self.edges {
            let edge = store.edge(id)?;
            for v in [edge.start, edge.end] {
                match incident.get_mut(v) {
                    Some(list) => list.push(id),
                    None => {
                        incident.insert(v, vec![id]);
                    }
                }
            }
        }
        if let Some((v, list)) = incident.iter().find(|(_, list)| list.len() != 2) {
            return Err(TopologyError::InvalidTopology(format!(
                "vertex {} is touched by {} boundary edges",
                store.vertex(v)?.label,
                list.len()
            )));
        }

        let start = store.edge(first)?.start;
        let mut ring = vec![start];
        let mut via = first;
        let mut current = store.edge(first)?.end;
        while current != start {
            ring.push(current);
            let list = incident
                .get(current)
                .ok_or_else(|| TopologyError::EntityNotFound("boundary vertex".into()))?;
            via = if list[0] == via { list[1] } else { list[0] };
            current = store
                .edge(via)?
                .opposite(current)
                .ok_or_else(|| TopologyError::InvalidTopology("broken edge chain".into()))?;
        }

        if ring.len() != self.edges.len() {
            return Err(TopologyError::InvalidTopology(format!(
                "boundary splits into several cycles ({} of {} edges reachable)",
                ring.len(),
                self.edges.len()
            )));
        }
        Ok(ring)
    }
}
