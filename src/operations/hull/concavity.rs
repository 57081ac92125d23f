use std::cmp::Ordering;

use tracing::trace;

use crate::error::Result;
use crate::math::intersect_2d::segments_intersect;
use crate::math::{Point2, TOLERANCE};
use crate::topology::{Boundary, EdgeId, HullStore, VertexId};

/// Decimal places kept when comparing cosines.
pub const COSINE_DECIMALS: i32 = 4;

/// Rounds half-to-even at `decimals` places; negative zero becomes zero.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round_ties_even() / scale + 0.0
}

/// Cosine of the angle `A-M-B` at the candidate `m`, by the law of cosines,
/// rounded to [`COSINE_DECIMALS`] places.
///
/// Returns `None` when `m` coincides with `a` or `b` (within [`TOLERANCE`]
/// times `|ab|`), where the angle is undefined, or when the squared
/// distances overflow.
#[must_use]
pub fn cosine_at(a: &Point2, b: &Point2, m: &Point2) -> Option<f64> {
    let a2 = (a - m).norm_squared();
    let b2 = (b - m).norm_squared();
    let c2 = (a - b).norm_squared();
    let min_sq = TOLERANCE * TOLERANCE * c2;
    if a2 <= min_sq || b2 <= min_sq {
        return None;
    }
    let cos = (a2 + b2 - c2) / (2.0 * a2.sqrt() * b2.sqrt());
    cos.is_finite().then(|| round_to_decimals(cos, COSINE_DECIMALS))
}

/// Returns `true` if segment `(s, e)` touches any boundary edge that does
/// not share an endpoint with it.
///
/// # Errors
///
/// Returns an error if an edge or vertex is not found in the store.
pub fn collides_with_boundary(
    store: &HullStore,
    boundary: &Boundary,
    s: VertexId,
    e: VertexId,
) -> Result<bool> {
    let ps = store.point(s)?;
    let pe = store.point(e)?;
    for &id in boundary.edge_ids() {
        let edge = store.edge(id)?;
        if edge.shares_endpoint(s, e) {
            continue;
        }
        let (q0, q1) = store.edge_points(id)?;
        if segments_intersect(&ps, &pe, &q0, &q1) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// An accepted dent: `edge` is to be replaced through `vertex`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Division {
    /// The boundary edge being divided.
    pub edge: EdgeId,
    /// The pooled vertex pulled onto the boundary.
    pub vertex: VertexId,
    /// Rounded cosine of the dent angle at `vertex`.
    pub cosine: f64,
}

/// Picks the best dent for one boundary edge among nearby candidates.
///
/// A candidate qualifies when its cosine is strictly below `concavity` and
/// neither new segment touches the rest of the boundary. The winner has the
/// smallest cosine (widest angle); equal cosines go to the lowest label.
#[derive(Debug)]
pub struct BestDivision<'a> {
    edge: EdgeId,
    candidates: &'a [VertexId],
    concavity: f64,
}

impl<'a> BestDivision<'a> {
    /// Creates a new selection over `candidates` for `edge`.
    #[must_use]
    pub fn new(edge: EdgeId, candidates: &'a [VertexId], concavity: f64) -> Self {
        Self {
            edge,
            candidates,
            concavity,
        }
    }

    /// Executes the selection against the current boundary.
    ///
    /// Returns `None` if no candidate qualifies.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge or vertex is not found in the store.
    pub fn execute(&self, store: &HullStore, boundary: &Boundary) -> Result<Option<Division>> {
        let edge = *store.edge(self.edge)?;
        let (a, b) = store.edge_points(self.edge)?;

        let mut best: Option<(Division, u64)> = None;
        for &m in self.candidates {
            let vertex = store.vertex(m)?;
            let Some(cosine) = cosine_at(&a, &b, &vertex.point) else {
                trace!(label = vertex.label, "skipping candidate on edge endpoint");
                continue;
            };
            if cosine.partial_cmp(&self.concavity) != Some(Ordering::Less) {
                continue;
            }
            if collides_with_boundary(store, boundary, edge.start, m)?
                || collides_with_boundary(store, boundary, m, edge.end)?
            {
                continue;
            }

            let beats = match best {
                None => true,
                Some((current, label)) => {
                    cosine
                        .total_cmp(&current.cosine)
                        .then(vertex.label.cmp(&label))
                        == Ordering::Less
                }
            };
            if beats {
                best = Some((
                    Division {
                        edge: self.edge,
                        vertex: m,
                        cosine,
                    },
                    vertex.label,
                ));
            }
        }
        Ok(best.map(|(division, _)| division))
    }
}
