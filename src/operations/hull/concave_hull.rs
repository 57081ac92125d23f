use std::collections::HashSet;

use tracing::debug;

use super::convex::ConvexBoundary;
use super::params::HullParams;
use super::refine::{HullRefiner, RefineReport};
use crate::error::{GeometryError, OperationError, Result};
use crate::math::Point2;
use crate::operations::query::IsSimple;
use crate::topology::{Boundary, CandidatePool, HullStore, VertexData, VertexId};

/// A concave hull computation over one point set.
///
/// The input is copied into an owned [`HullStore`] on construction.
/// [`calculate`](Self::calculate) builds the convex boundary, then carves it
/// into the concave boundary; both stay readable until the next run.
///
/// ```
/// use carvehull::operations::hull::{ConcaveHull, HullParams};
/// use carvehull::topology::VertexData;
///
/// let points = [
///     VertexData::at(0, 0.0, 0.0),
///     VertexData::at(1, 10.0, 0.0),
///     VertexData::at(2, 10.0, 10.0),
///     VertexData::at(3, 0.0, 10.0),
///     VertexData::at(4, 5.0, 1.0),
/// ];
/// let mut hull = ConcaveHull::new(&points)?;
/// hull.calculate(&HullParams::new(0.9, 100.0))?;
/// assert_eq!(hull.convex_edges().len(), 4);
/// assert_eq!(hull.concave_edges().len(), 5);
/// # Ok::<(), carvehull::HullError>(())
/// ```
#[derive(Debug)]
pub struct ConcaveHull {
    store: HullStore,
    input: Vec<VertexId>,
    convex: Boundary,
    concave: Boundary,
    unused: CandidatePool,
    report: Option<RefineReport>,
}

impl ConcaveHull {
    /// Creates a computation over a copy of `vertices`.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if a coordinate is NaN or infinite
    /// - `OperationError::DuplicateLabel` if two vertices share a label
    pub fn new(vertices: &[VertexData]) -> Result<Self> {
        let mut labels = HashSet::with_capacity(vertices.len());
        let mut store = HullStore::new();
        let mut input = Vec::with_capacity(vertices.len());
        for v in vertices {
            if !v.point.x.is_finite() || !v.point.y.is_finite() {
                return Err(GeometryError::NonFinite {
                    label: v.label,
                    x: v.point.x,
                    y: v.point.y,
                }
                .into());
            }
            if !labels.insert(v.label) {
                return Err(OperationError::DuplicateLabel(v.label).into());
            }
            input.push(store.add_vertex(*v));
        }
        Ok(Self {
            store,
            input,
            convex: Boundary::default(),
            concave: Boundary::default(),
            unused: CandidatePool::default(),
            report: None,
        })
    }

    /// Runs the convex step and then concave refinement.
    ///
    /// Results of a previous run are discarded first; on error they stay
    /// empty.
    ///
    /// # Errors
    ///
    /// - `GeometryError` if `params` are invalid or the input is collinear
    /// - `OperationError::InsufficientInput` if fewer than 3 distinct points exist
    pub fn calculate(&mut self, params: &HullParams) -> Result<()> {
        self.reset();
        params.validate()?;

        let (convex, mut unused) = ConvexBoundary::new(self.input.clone()).execute(&mut self.store)?;
        let mut concave = convex.duplicate(&mut self.store)?;
        debug!(
            points = self.input.len(),
            convex_edges = convex.len(),
            pool = unused.len(),
            "convex boundary built"
        );

        let report = HullRefiner::new(*params).execute(&mut self.store, &mut concave, &mut unused)?;
        debug!(
            passes = report.passes,
            divisions = report.divisions,
            concave_edges = concave.len(),
            unused = unused.len(),
            "concave boundary settled"
        );

        self.convex = convex;
        self.concave = concave;
        self.unused = unused;
        self.report = Some(report);
        Ok(())
    }

    fn reset(&mut self) {
        self.store.clear_edges();
        self.convex = Boundary::default();
        self.concave = Boundary::default();
        self.unused = CandidatePool::default();
        self.report = None;
    }

    /// The arena holding every vertex and edge of this computation.
    #[must_use]
    pub fn store(&self) -> &HullStore {
        &self.store
    }

    /// Input vertex IDs in construction order.
    #[must_use]
    pub fn input(&self) -> &[VertexId] {
        &self.input
    }

    /// Convex boundary edges, in hull order with the closing edge last.
    #[must_use]
    pub fn convex_edges(&self) -> &Boundary {
        &self.convex
    }

    /// Concave boundary edges, longest first.
    #[must_use]
    pub fn concave_edges(&self) -> &Boundary {
        &self.concave
    }

    /// Vertices that could not be placed on the concave boundary.
    #[must_use]
    pub fn unused(&self) -> &CandidatePool {
        &self.unused
    }

    /// Statistics of the last successful run.
    #[must_use]
    pub fn report(&self) -> Option<RefineReport> {
        self.report
    }

    /// Resolves each edge of `boundary` to its two endpoint vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge or vertex is not in this computation's store.
    pub fn segments(&self, boundary: &Boundary) -> Result<Vec<[VertexData; 2]>> {
        let mut out = Vec::with_capacity(boundary.len());
        for &id in boundary.edge_ids() {
            let edge = self.store.edge(id)?;
            out.push([*self.store.vertex(edge.start)?, *self.store.vertex(edge.end)?]);
        }
        Ok(out)
    }

    /// The concave boundary as one closed loop of positions.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` before the first successful
    /// run, or if the boundary is not a single cycle.
    pub fn concave_ring(&self) -> Result<Vec<Point2>> {
        self.ring_points(&self.concave)
    }

    /// The convex boundary as one closed loop of positions.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` before the first successful run.
    pub fn convex_ring(&self) -> Result<Vec<Point2>> {
        self.ring_points(&self.convex)
    }

    fn ring_points(&self, boundary: &Boundary) -> Result<Vec<Point2>> {
        let ring = boundary.ring(&self.store)?;
        let points = ring
            .into_iter()
            .map(|v| self.store.point(v))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(points)
    }

    /// Returns `true` if the concave boundary is a simple closed polygon.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        IsSimple::new(&self.concave).execute(&self.store)
    }
}
