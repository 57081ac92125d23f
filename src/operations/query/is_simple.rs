use crate::math::intersect_2d::segments_intersect;
use crate::topology::{Boundary, HullStore};

/// Checks that a boundary is a simple polygon.
///
/// The boundary must traverse as exactly one closed cycle, and no two edges
/// that do not share a vertex may touch.
pub struct IsSimple<'a> {
    boundary: &'a Boundary,
}

impl<'a> IsSimple<'a> {
    /// Creates a new `IsSimple` query.
    #[must_use]
    pub fn new(boundary: &'a Boundary) -> Self {
        Self { boundary }
    }

    /// Executes the check. Stale handles make the boundary not simple.
    #[must_use]
    pub fn execute(&self, store: &HullStore) -> bool {
        if self.boundary.ring(store).is_err() {
            return false;
        }

        let mut segments = Vec::with_capacity(self.boundary.len());
        for &id in self.boundary.edge_ids() {
            let (Ok(edge), Ok(points)) = (store.edge(id), store.edge_points(id)) else {
                return false;
            };
            segments.push((*edge, points));
        }

        for (i, (edge_i, (a0, a1))) in segments.iter().enumerate() {
            for (edge_j, (b0, b1)) in &segments[i + 1..] {
                if edge_i.shares_endpoint(edge_j.start, edge_j.end) {
                    continue;
                }
                if segments_intersect(a0, a1, b0, b1) {
                    return false;
                }
            }
        }
        true
    }
}
