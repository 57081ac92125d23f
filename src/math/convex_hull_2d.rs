use std::cmp::Ordering;

use super::{orient_2d, Point2, TOLERANCE};
use crate::error::{GeometryError, OperationError, Result};

/// Lexicographic `(x, y)` ordering used by the monotone chain sweep.
fn lexicographic(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

/// Computes the convex hull of a point set with Andrew's monotone chain.
///
/// Returns indices into `points`, in counter-clockwise order starting at the
/// lexicographically smallest point, without repeating the first index at the
/// end. Points lying on a hull edge are kept on the boundary. When several
/// input points share a position only the first of them is eligible.
///
/// # Errors
///
/// - `OperationError::InsufficientInput` if fewer than 3 distinct positions are given
/// - `GeometryError::Collinear` if every point lies within [`TOLERANCE`]
///   times the point set's extent of one line
pub fn convex_hull_2d(points: &[Point2]) -> Result<Vec<usize>> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    // Stable sort keeps the first of several coincident points in front.
    order.sort_by(|&i, &j| lexicographic(&points[i], &points[j]));
    order.dedup_by(|later, earlier| points[*later] == points[*earlier]);

    if order.len() < 3 {
        return Err(OperationError::InsufficientInput { found: order.len() }.into());
    }

    let first = &points[order[0]];
    let last = &points[order[order.len() - 1]];
    let span = (last - first).norm();
    let spread = order
        .iter()
        .map(|&i| orient_2d(first, last, &points[i]).abs() / span)
        .fold(0.0_f64, f64::max);
    if spread <= TOLERANCE * span {
        return Err(GeometryError::Collinear(order.len()).into());
    }

    let lower = half_hull(points, order.iter().copied());
    let upper = half_hull(points, order.iter().rev().copied());

    let mut hull = Vec::with_capacity(lower.len() + upper.len() - 2);
    hull.extend_from_slice(&lower[..lower.len() - 1]);
    hull.extend_from_slice(&upper[..upper.len() - 1]);
    Ok(hull)
}

/// One monotone chain: pops while the last turn is clockwise, so collinear
/// points stay on the chain.
fn half_hull(points: &[Point2], sweep: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut chain: Vec<usize> = Vec::new();
    for idx in sweep {
        while chain.len() >= 2 {
            let a = &points[chain[chain.len() - 2]];
            let b = &points[chain[chain.len() - 1]];
            if orient_2d(a, b, &points[idx]) < 0.0 {
                chain.pop();
            } else {
                break;
            }
        }
        chain.push(idx);
    }
    chain
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HullError;
    use crate::math::polygon_2d::signed_area_2d;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn square_with_interior_point() {
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 1.0)]);
        let hull = convex_hull_2d(&points).unwrap();
        assert_eq!(hull, vec![0, 1, 2, 3]);
    }

    #[test]
    fn output_is_counter_clockwise() {
        let points = pts(&[(3.0, 9.0), (0.0, 0.0), (7.0, 2.0), (9.0, 8.0), (4.0, 4.0), (1.0, 6.0)]);
        let hull = convex_hull_2d(&points).unwrap();
        let ring: Vec<Point2> = hull.iter().map(|&i| points[i]).collect();
        assert!(signed_area_2d(&ring) > 0.0);
        assert!(!hull.contains(&4));
    }

    #[test]
    fn collinear_boundary_points_are_kept() {
        let points = pts(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (5.0, 0.0),
            (0.0, 5.0),
            (10.0, 5.0),
        ]);
        let hull = convex_hull_2d(&points).unwrap();
        assert_eq!(hull, vec![0, 4, 1, 6, 2, 3, 5]);
    }

    #[test]
    fn coincident_points_keep_first() {
        let points = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (4.0, 0.0)]);
        let hull = convex_hull_2d(&points).unwrap();
        assert_eq!(hull.len(), 3);
        assert!(hull.contains(&1));
        assert!(!hull.contains(&3));
    }

    #[test]
    fn too_few_points() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0)]);
        let err = convex_hull_2d(&points).unwrap_err();
        assert!(matches!(
            err,
            HullError::Operation(OperationError::InsufficientInput { found: 2 })
        ));
    }

    #[test]
    fn collinear_input_rejected() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (5.0, 5.0)]);
        let err = convex_hull_2d(&points).unwrap_err();
        assert!(matches!(err, HullError::Geometry(GeometryError::Collinear(4))));
    }

    #[test]
    fn tiny_triangle_is_not_collinear() {
        let points = pts(&[(0.0, 0.0), (1e-12, 0.0), (0.0, 1e-12)]);
        let hull = convex_hull_2d(&points).unwrap();
        assert_eq!(hull.len(), 3);
    }

    #[test]
    fn flat_sliver_at_large_scale_is_collinear() {
        let points = pts(&[(0.0, 0.0), (1e12, 0.0), (5e11, 1e-3)]);
        let err = convex_hull_2d(&points).unwrap_err();
        assert!(matches!(err, HullError::Geometry(GeometryError::Collinear(3))));
    }
}
