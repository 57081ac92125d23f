use super::{orient_2d, Point2, TOLERANCE};

/// Orientation sign with a band of `band` (area units) around zero.
fn orientation_sign(value: f64, band: f64) -> i8 {
    if value > band {
        1
    } else if value < -band {
        -1
    } else {
        0
    }
}

/// Returns `true` if `p`, known to be collinear with segment `(a, b)`,
/// lies within the segment's bounding box grown by `slack`.
fn within_segment_box(a: &Point2, b: &Point2, p: &Point2, slack: f64) -> bool {
    p.x >= a.x.min(b.x) - slack
        && p.x <= a.x.max(b.x) + slack
        && p.y >= a.y.min(b.y) - slack
        && p.y <= a.y.max(b.y) + slack
}

/// Closed-segment intersection test for segments `(a0, a1)` and `(b0, b1)`.
///
/// Reports `true` for proper crossings and also for every form of contact:
/// an endpoint touching the other segment, collinear overlap, and shared
/// endpoints. Callers that must tolerate a shared endpoint (adjacent boundary
/// edges) filter those pairs by vertex identity before calling this.
///
/// The tolerance is [`TOLERANCE`] times the longer segment's length, so
/// scaling all four points by a common factor never changes the answer.
#[must_use]
pub fn segments_intersect(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let scale = nalgebra::distance(a0, a1).max(nalgebra::distance(b0, b1));
    let slack = TOLERANCE * scale;
    let band = slack * scale;

    let d1 = orientation_sign(orient_2d(b0, b1, a0), band);
    let d2 = orientation_sign(orient_2d(b0, b1, a1), band);
    let d3 = orientation_sign(orient_2d(a0, a1, b0), band);
    let d4 = orientation_sign(orient_2d(a0, a1, b1), band);

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    (d1 == 0 && within_segment_box(b0, b1, a0, slack))
        || (d2 == 0 && within_segment_box(b0, b1, a1, slack))
        || (d3 == 0 && within_segment_box(a0, a1, b0, slack))
        || (d4 == 0 && within_segment_box(a0, a1, b1, slack))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn proper_crossing() {
        assert!(segments_intersect(
            &p(0.0, 0.0),
            &p(10.0, 10.0),
            &p(0.0, 10.0),
            &p(10.0, 0.0)
        ));
    }

    #[test]
    fn disjoint_parallel() {
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(10.0, 0.0),
            &p(0.0, 1.0),
            &p(10.0, 1.0)
        ));
    }

    #[test]
    fn disjoint_skew() {
        // Lines cross, segments do not.
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(1.0, 1.0),
            &p(5.0, 0.0),
            &p(4.0, 1.0)
        ));
    }

    #[test]
    fn endpoint_touching_interior() {
        assert!(segments_intersect(
            &p(5.0, 0.0),
            &p(5.0, 5.0),
            &p(0.0, 0.0),
            &p(10.0, 0.0)
        ));
    }

    #[test]
    fn shared_endpoint_counts_as_contact() {
        assert!(segments_intersect(
            &p(0.0, 0.0),
            &p(5.0, 5.0),
            &p(5.0, 5.0),
            &p(10.0, 0.0)
        ));
    }

    #[test]
    fn collinear_overlap() {
        assert!(segments_intersect(
            &p(0.0, 0.0),
            &p(6.0, 0.0),
            &p(4.0, 0.0),
            &p(10.0, 0.0)
        ));
    }

    #[test]
    fn collinear_disjoint() {
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(3.0, 0.0),
            &p(4.0, 0.0),
            &p(10.0, 0.0)
        ));
    }

    #[test]
    fn tiny_parallel_gap_is_not_contact() {
        // Gap of a thousandth of the segment length, at nanometre scale.
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(1e-9, 0.0),
            &p(0.0, 1e-12),
            &p(1e-9, 1e-12)
        ));
    }

    #[test]
    fn tiny_touching_segments_still_touch() {
        assert!(segments_intersect(
            &p(5e-10, 0.0),
            &p(5e-10, 5e-10),
            &p(0.0, 0.0),
            &p(1e-9, 0.0)
        ));
    }

    #[test]
    fn answer_survives_uniform_scaling() {
        let cases = [
            [p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(10.0, 0.0)],
            [p(0.0, 0.0), p(1.0, 1.0), p(5.0, 0.0), p(4.0, 1.0)],
            [p(5.0, 0.0), p(5.0, 5.0), p(0.0, 0.0), p(10.0, 0.0)],
            [p(0.0, 0.0), p(3.0, 0.0), p(4.0, 0.0), p(10.0, 0.0)],
        ];
        for [a0, a1, b0, b1] in cases {
            let expected = segments_intersect(&a0, &a1, &b0, &b1);
            for s in [1e-12, 1e-6, 1e6] {
                let q = |v: Point2| Point2::new(v.x * s, v.y * s);
                assert_eq!(
                    segments_intersect(&q(a0), &q(a1), &q(b0), &q(b1)),
                    expected,
                    "scale {s}"
                );
            }
        }
    }
}
