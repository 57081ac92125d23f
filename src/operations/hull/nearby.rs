use tracing::trace;

use crate::error::Result;
use crate::math::Point2;
use crate::topology::{CandidatePool, EdgeId, HullStore, VertexId};

/// Growth applied to the cell size when a search window comes up empty.
pub const WINDOW_GROWTH: f64 = 4.0 / 3.0;

/// Number of windows tried per edge before giving up.
pub const MAX_SEARCH_ATTEMPTS: usize = 2;

/// Grid cell containing `coord` for cells of side `cell`.
fn cell_index(coord: f64, cell: f64) -> f64 {
    (coord / cell).floor()
}

/// Axis-aligned range of grid cells covering a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchWindow {
    cell: f64,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl SearchWindow {
    /// Builds the window of cells covering the bounding box of `(a, b)`.
    #[must_use]
    pub fn around(a: &Point2, b: &Point2, cell: f64) -> Self {
        Self {
            cell,
            min_x: cell_index(a.x.min(b.x), cell),
            min_y: cell_index(a.y.min(b.y), cell),
            max_x: cell_index(a.x.max(b.x), cell),
            max_y: cell_index(a.y.max(b.y), cell),
        }
    }

    /// Returns `true` if the cell of `p` lies inside the window.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        let cx = cell_index(p.x, self.cell);
        let cy = cell_index(p.y, self.cell);
        cx >= self.min_x && cx <= self.max_x && cy >= self.min_y && cy <= self.max_y
    }
}

/// Finds pooled vertices near one boundary edge.
///
/// A vertex is nearby when its grid cell falls inside the [`SearchWindow`]
/// of the edge. An empty first window is retried once with cells grown by
/// [`WINDOW_GROWTH`]; after [`MAX_SEARCH_ATTEMPTS`] empty windows the edge
/// has no candidates. Vertices sitting exactly on an edge endpoint are
/// never returned.
#[derive(Debug)]
pub struct NearbyCandidates {
    edge: EdgeId,
    scale_factor: f64,
}

impl NearbyCandidates {
    /// Creates a new search around `edge` with the initial cell size.
    #[must_use]
    pub fn new(edge: EdgeId, scale_factor: f64) -> Self {
        Self { edge, scale_factor }
    }

    /// Executes the search, returning candidates in pool order.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or a pooled vertex is not in the store.
    pub fn execute(&self, store: &HullStore, pool: &CandidatePool) -> Result<Vec<VertexId>> {
        let (a, b) = store.edge_points(self.edge)?;
        let mut cell = self.scale_factor;

        for attempt in 0..MAX_SEARCH_ATTEMPTS {
            let window = SearchWindow::around(&a, &b, cell);
            let mut nearby = Vec::new();
            for &id in pool.ids() {
                let p = store.point(id)?;
                if p == a || p == b {
                    continue;
                }
                if window.contains(&p) {
                    nearby.push(id);
                }
            }
            if !nearby.is_empty() {
                return Ok(nearby);
            }
            trace!(attempt, cell, "empty search window");
            cell *= WINDOW_GROWTH;
        }
        Ok(Vec::new())
    }
}
