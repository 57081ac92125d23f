use tracing::{trace, warn};

use super::concavity::{BestDivision, Division};
use super::nearby::NearbyCandidates;
use super::params::HullParams;
use crate::error::{Result, TopologyError};
use crate::topology::{Boundary, CandidatePool, HullStore};

/// Summary of one refinement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefineReport {
    /// Number of passes over the boundary, including the final settled one.
    pub passes: usize,
    /// Number of dents applied.
    pub divisions: usize,
    /// `true` if refinement stopped at `max_divisions` rather than settling.
    pub budget_exhausted: bool,
}

/// Result of scanning the boundary once.
#[derive(Debug, Clone, Copy)]
enum PassOutcome {
    /// The first edge that admits a dent, with its winning candidate.
    Divided(Division),
    /// No edge admits any qualifying candidate.
    Settled,
}

/// Carves a boundary inward until no edge can be divided.
///
/// # Algorithm
///
/// Each pass walks the boundary in its current order. The first edge with a
/// qualifying candidate is divided and the pass ends, because the boundary
/// changed under it. After every pass the edges are re-sorted longest first.
/// A pass without a division is terminal.
///
/// Every division removes one vertex from the pool for good, so the number
/// of passes is bounded by the initial pool size plus one.
#[derive(Debug)]
pub struct HullRefiner {
    params: HullParams,
}

impl HullRefiner {
    /// Creates a new refiner.
    #[must_use]
    pub fn new(params: HullParams) -> Self {
        Self { params }
    }

    /// Executes refinement in place on `boundary` and `pool`.
    ///
    /// # Errors
    ///
    /// - `GeometryError` if the parameters are invalid
    /// - `TopologyError` if the boundary or pool reference missing entities
    pub fn execute(
        &self,
        store: &mut HullStore,
        boundary: &mut Boundary,
        pool: &mut CandidatePool,
    ) -> Result<RefineReport> {
        self.params.validate()?;
        let mut report = RefineReport::default();

        loop {
            if self
                .params
                .max_divisions
                .is_some_and(|max| report.divisions >= max)
            {
                warn!(
                    divisions = report.divisions,
                    remaining = pool.len(),
                    "division budget exhausted, stopping refinement"
                );
                report.budget_exhausted = true;
                boundary.sort_by_length_desc(store)?;
                break;
            }

            report.passes += 1;
            let outcome = self.scan(store, boundary, pool)?;
            if let PassOutcome::Divided(division) = outcome {
                apply(store, boundary, pool, &division)?;
                report.divisions += 1;
            }
            boundary.sort_by_length_desc(store)?;

            if matches!(outcome, PassOutcome::Settled) {
                break;
            }
        }
        Ok(report)
    }

    /// One pass: finds the first edge, in boundary order, that admits a dent.
    fn scan(
        &self,
        store: &HullStore,
        boundary: &Boundary,
        pool: &CandidatePool,
    ) -> Result<PassOutcome> {
        if pool.is_empty() {
            return Ok(PassOutcome::Settled);
        }
        for &edge in boundary.edge_ids() {
            let nearby = NearbyCandidates::new(edge, self.params.scale_factor).execute(store, pool)?;
            if nearby.is_empty() {
                continue;
            }
            let best = BestDivision::new(edge, &nearby, self.params.concavity)
                .execute(store, boundary)?;
            if let Some(division) = best {
                return Ok(PassOutcome::Divided(division));
            }
        }
        Ok(PassOutcome::Settled)
    }
}

/// Moves the winning vertex from the pool onto the boundary.
fn apply(
    store: &mut HullStore,
    boundary: &mut Boundary,
    pool: &mut CandidatePool,
    division: &Division,
) -> Result<()> {
    if !pool.take(division.vertex) {
        return Err(TopologyError::EntityNotFound("pooled vertex".into()).into());
    }
    boundary.divide(store, division.edge, division.vertex)?;
    trace!(
        label = store.vertex(division.vertex)?.label,
        cosine = division.cosine,
        "divided boundary edge"
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::hull::ConvexBoundary;
    use crate::topology::{VertexData, VertexId};

    fn setup(coords: &[(f64, f64)]) -> (HullStore, Boundary, CandidatePool, Vec<VertexId>) {
        let mut store = HullStore::new();
        let ids: Vec<VertexId> = coords
            .iter()
            .zip(0_u64..)
            .map(|(&(x, y), label)| store.add_vertex(VertexData::at(label, x, y)))
            .collect();
        let (boundary, pool) = ConvexBoundary::new(ids.clone()).execute(&mut store).unwrap();
        (store, boundary, pool, ids)
    }

    const SQUARE_WITH_DENT: [(f64, f64); 5] =
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 1.0)];

    #[test]
    fn single_dent_then_settles() {
        let (mut store, mut boundary, mut pool, ids) = setup(&SQUARE_WITH_DENT);
        let report = HullRefiner::new(HullParams::new(0.9, 100.0))
            .execute(&mut store, &mut boundary, &mut pool)
            .unwrap();

        assert_eq!(
            report,
            RefineReport {
                passes: 2,
                divisions: 1,
                budget_exhausted: false,
            }
        );
        assert!(pool.is_empty());
        assert_eq!(boundary.len(), 5);
        assert!(boundary.vertices(&store).unwrap().contains(&ids[4]));
    }

    #[test]
    fn result_is_sorted_longest_first() {
        let (mut store, mut boundary, mut pool, _) = setup(&SQUARE_WITH_DENT);
        HullRefiner::new(HullParams::new(0.9, 100.0))
            .execute(&mut store, &mut boundary, &mut pool)
            .unwrap();
        let lengths: Vec<f64> = boundary
            .edge_ids()
            .iter()
            .map(|&e| store.edge_length(e).unwrap())
            .collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn minimum_concavity_changes_nothing() {
        let (mut store, mut boundary, mut pool, _) = setup(&SQUARE_WITH_DENT);
        let before = boundary.clone();
        let report = HullRefiner::new(HullParams::new(-1.0, 100.0))
            .execute(&mut store, &mut boundary, &mut pool)
            .unwrap();
        assert_eq!(report.divisions, 0);
        assert_eq!(report.passes, 1);
        assert_eq!(boundary, before);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn budget_stops_refinement() {
        let (mut store, mut boundary, mut pool, _) = setup(&[
            (0.0, 0.0),
            (20.0, 0.0),
            (20.0, 20.0),
            (0.0, 20.0),
            (5.0, 1.0),
            (15.0, 1.0),
            (19.0, 10.0),
        ]);
        let params = HullParams::new(0.9, 100.0).with_max_divisions(1);
        let report = HullRefiner::new(params)
            .execute(&mut store, &mut boundary, &mut pool)
            .unwrap();
        assert_eq!(report.divisions, 1);
        assert!(report.budget_exhausted);
        assert_eq!(pool.len(), 2);
        assert!(boundary.ring(&store).is_ok());
    }

    #[test]
    fn invalid_params_are_rejected_before_work() {
        let (mut store, mut boundary, mut pool, _) = setup(&SQUARE_WITH_DENT);
        let before = boundary.clone();
        assert!(HullRefiner::new(HullParams::new(1.5, 100.0))
            .execute(&mut store, &mut boundary, &mut pool)
            .is_err());
        assert_eq!(boundary, before);
    }
}
